//! CLI output formatting.
//!
//! Each command has a `format_*` function returning `Vec<String>` for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure.
//!
//! ## Tags
//!
//! ```text
//! Page
//!     Title: Contact Us | Northside Plumbing
//!     Canonical: https://northside.test/contact
//!     ...
//! Open Graph
//!     Type: website
//!     Image: https://northside.test/images/og-default.jpg (1200x630 image/jpeg)
//!         Alt: Northside Plumbing service van
//! Twitter
//!     Card: summary_large_image
//! ```
//!
//! ## Related
//!
//! ```text
//! Related to: Spring Gutter Checklist
//! 001 Downspout Extensions (2 shared tags)
//!     Source: downspout-extensions
//! 002 Frozen Pipes (0 shared tags)
//!     Source: frozen-pipes
//! ```

use crate::graph::SchemaGraph;
use crate::related::RelatednessScore;
use crate::schema::Schema;
use crate::tags::ResolvedTagSet;
use crate::types::BlogPost;

const DESCRIPTION_PREVIEW_CHARS: usize = 80;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}

fn field(depth: usize, label: &str, value: &str) -> String {
    format!("{}{}: {}", indent(depth), label, value)
}

// ============================================================================
// Tags
// ============================================================================

/// Format a resolved tag set, grouped the way it lands in the page head.
pub fn format_tag_set(tags: &ResolvedTagSet) -> Vec<String> {
    let mut lines = vec![
        "Page".to_string(),
        field(1, "Title", &tags.title),
        field(
            1,
            "Description",
            &truncate_desc(&tags.description, DESCRIPTION_PREVIEW_CHARS),
        ),
        field(1, "Canonical", &tags.canonical),
        field(1, "Robots", &tags.robots),
        field(1, "Keywords", &tags.keywords),
        field(1, "Locale", &tags.locale),
        field(1, "Author", &tags.author),
        "Open Graph".to_string(),
        field(1, "Type", &tags.og_type),
        field(1, "Title", &tags.og_title),
        field(
            1,
            "Description",
            &truncate_desc(&tags.og_description, DESCRIPTION_PREVIEW_CHARS),
        ),
        field(1, "URL", &tags.og_url),
        field(1, "Site name", &tags.og_site_name),
    ];

    match &tags.og_image {
        Some(image) => {
            lines.push(field(
                1,
                "Image",
                &format!(
                    "{} ({}x{} {})",
                    image.url, image.width, image.height, image.mime_type
                ),
            ));
            lines.push(field(2, "Alt", &image.alt));
        }
        None => lines.push(field(1, "Image", "(none)")),
    }

    lines.push("Twitter".to_string());
    lines.push(field(1, "Card", &tags.twitter_card));
    lines.push(field(1, "Title", &tags.twitter_title));
    lines.push(field(
        1,
        "Description",
        &truncate_desc(&tags.twitter_description, DESCRIPTION_PREVIEW_CHARS),
    ));
    if let Some(image) = &tags.twitter_image {
        lines.push(field(1, "Image", image));
    }
    if let Some(site) = &tags.twitter_site {
        lines.push(field(1, "Site", site));
    }

    if tags.published_time.is_some() || tags.modified_time.is_some() {
        lines.push("Article".to_string());
        if let Some(published) = &tags.published_time {
            lines.push(field(1, "Published", published));
        }
        if let Some(modified) = &tags.modified_time {
            lines.push(field(1, "Modified", modified));
        }
    }

    if let Some(geo) = &tags.geo {
        lines.push("Geo".to_string());
        lines.push(field(1, "Region", &geo.region));
        lines.push(field(1, "Placename", &geo.placename));
        lines.push(field(1, "Position", &geo.position));
    }

    lines
}

pub fn print_tag_set(tags: &ResolvedTagSet) {
    for line in format_tag_set(tags) {
        println!("{}", line);
    }
}

// ============================================================================
// Structured data
// ============================================================================

/// One line per graph entity, in graph order, followed by the JSON-LD.
pub fn format_graph(graph: &SchemaGraph, json_ld: &str) -> Vec<String> {
    let mut lines = vec!["Structured data".to_string()];
    for (i, schema) in graph.graph.iter().enumerate() {
        lines.push(format!(
            "{}{} {}{}",
            indent(1),
            format_index(i + 1),
            schema.type_name(),
            schema_detail(schema)
        ));
    }
    lines.push(String::new());
    lines.push(json_ld.to_string());
    lines
}

/// Short parenthesized summary for list-like entities.
fn schema_detail(schema: &Schema) -> String {
    match schema {
        Schema::BreadcrumbList(list) => format!(" ({} items)", list.item_list_element.len()),
        Schema::FaqPage(faq) => format!(" ({} questions)", faq.main_entity.len()),
        Schema::Service(service) => format!(" ({})", service.name),
        Schema::BlogPosting(post) => format!(" ({})", post.headline),
        _ => String::new(),
    }
}

pub fn print_graph(graph: &SchemaGraph, json_ld: &str) {
    for line in format_graph(graph, json_ld) {
        println!("{}", line);
    }
}

// ============================================================================
// Related posts
// ============================================================================

pub fn format_related(reference: &BlogPost, ranked: &[RelatednessScore]) -> Vec<String> {
    let mut lines = vec![format!("Related to: {}", reference.title)];
    if ranked.is_empty() {
        lines.push(format!("{}(no other posts)", indent(1)));
    }
    for (i, scored) in ranked.iter().enumerate() {
        let noun = if scored.score == 1 { "tag" } else { "tags" };
        lines.push(format!(
            "{} {} ({} shared {})",
            format_index(i + 1),
            scored.post.title,
            scored.score,
            noun
        ));
        lines.push(field(1, "Source", &scored.post.slug));
    }
    lines
}

pub fn print_related(reference: &BlogPost, ranked: &[RelatednessScore]) {
    for line in format_related(reference, ranked) {
        println!("{}", line);
    }
}
