//! # Site SEO
//!
//! Search-engine and social-sharing metadata for a local services business
//! website. Every page gets a complete, consistent set of head tags and
//! schema.org structured data, even when the page itself supplies almost
//! nothing.
//!
//! # Architecture: Resolve, Build, Compose
//!
//! Page code describes only what differs from the site defaults. The engine
//! fills in the rest and renders two independent outputs into the page head:
//!
//! ```text
//! defaults::*_page_seo  →  PageSeoConfig (partial)
//!                              │ overlay page overrides
//!                              ▼
//! tags::generate_complete_seo_tags  →  ResolvedTagSet  →  <title>, <meta>, <link>
//!
//! schema::generate_*_schema  →  Schema, Schema, ...
//!                              │ graph::generate_schema_graph
//!                              ▼
//! graph::schema_to_json_ld  →  <script type="application/ld+json">
//! ```
//!
//! Listing pages call [`related::get_related_blog_posts`] on their own.
//!
//! Every function in the pipeline is pure: the site identity is passed in as
//! a [`config::SiteConfig`] value, nothing is cached, and the same inputs
//! always produce byte-identical output.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `seo.toml` loading, validation, and the stock business identity |
//! | [`types`] | Values shared across modules (`PageSeoConfig`, `BlogPost`, `BreadcrumbItem`, `FaqItem`) |
//! | [`defaults`] | Per-archetype page factories: home, contact, quote, FAQ, gallery, privacy, service, blog |
//! | [`tags`] | Resolves a partial page config into a total `ResolvedTagSet` |
//! | [`schema`] | One builder per schema.org type, all variants of the `Schema` enum |
//! | [`graph`] | `@graph` composition and deterministic JSON-LD serialization |
//! | [`related`] | Related-post ranking by shared tag count |
//! | [`content`] | Loads blog posts from markdown files with TOML front matter |
//! | [`head`] | Renders resolved tags and JSON-LD as `<head>` markup using Maud |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Resolution Is Total
//!
//! [`tags::generate_complete_seo_tags`] never returns a missing field for
//! anything with a site-level default. Optional pieces are modelled as
//! `Option` only where absence is meaningful: geo tags need all three inputs
//! (region, place name, position) or are omitted entirely, and article
//! timestamps have no site default.
//!
//! ## Typed Schema Variants
//!
//! Structured data is a closed [`schema::Schema`] enum serialized with an
//! internal `@type` tag rather than free-form JSON maps. A builder cannot
//! produce a `Service` without a provider, and the JSON key order follows
//! the struct declaration, so output is stable and diffable.
//!
//! ## Injected Site Identity
//!
//! There are no globals. Business name, phone, service area and base URL all
//! live in one [`config::SiteConfig`], loaded from `seo.toml` on top of
//! stock defaults. Tests construct their own identity, so every assertion
//! proves a value came from the config rather than a hard-coded string.
//!
//! ## Maud for Head Markup
//!
//! [`head`] renders tags with [Maud](https://maud.lambda.xyz/), so titles
//! and descriptions are escaped automatically. The JSON-LD string is the
//! only pre-escaped content; [`graph::schema_to_json_ld`] escapes `<`, `>`
//! and `&` so it cannot break out of its `<script>` element.

pub mod config;
pub mod content;
pub mod defaults;
pub mod graph;
pub mod head;
pub mod output;
pub mod related;
pub mod schema;
pub mod tags;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
