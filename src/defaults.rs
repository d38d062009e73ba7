//! Page archetype factories.
//!
//! Each factory returns the base [`PageSeoConfig`] for a kind of page the
//! site has: title, description and canonical URL filled in from the site
//! identity. Pages customize the result with
//! [`PageSeoConfig::overlay`] before resolving it.
//!
//! Factories are pure and cannot fail.

use crate::config::SiteConfig;
use crate::types::{BlogPost, PageSeoConfig};

fn page(title: String, description: String, canonical: String) -> PageSeoConfig {
    PageSeoConfig {
        title: Some(title),
        description: Some(description),
        canonical: Some(canonical),
        ..Default::default()
    }
}

/// `" in Springfield"`, or nothing when no service area is configured.
fn area_suffix(site: &SiteConfig) -> String {
    site.business
        .primary_area()
        .map(|area| format!(" in {area}"))
        .unwrap_or_default()
}

pub fn home_page_seo(site: &SiteConfig) -> PageSeoConfig {
    let name = &site.business.name;
    page(
        format!("{name} | Trusted Local Services{}", area_suffix(site)),
        site.business.description.clone(),
        site.absolute_url("/"),
    )
}

pub fn contact_page_seo(site: &SiteConfig) -> PageSeoConfig {
    let name = &site.business.name;
    page(
        format!("Contact Us | {name}"),
        format!(
            "Get in touch with {name}{}. Call {} or send us a message and we'll respond within one business day.",
            area_suffix(site),
            site.business.telephone
        ),
        site.absolute_url("/contact"),
    )
}

pub fn quote_page_seo(site: &SiteConfig) -> PageSeoConfig {
    let name = &site.business.name;
    page(
        format!("Request a Free Quote | {name}"),
        format!(
            "Request a free, no-obligation quote from {name}{}. Tell us about your project and we'll get back to you quickly.",
            area_suffix(site)
        ),
        site.absolute_url("/quote"),
    )
}

pub fn faq_page_seo(site: &SiteConfig) -> PageSeoConfig {
    let name = &site.business.name;
    page(
        format!("Frequently Asked Questions | {name}"),
        format!(
            "Answers to common questions about {name}: pricing, scheduling, service areas, warranties and more."
        ),
        site.absolute_url("/faq"),
    )
}

pub fn gallery_page_seo(site: &SiteConfig) -> PageSeoConfig {
    let name = &site.business.name;
    page(
        format!("Project Gallery | {name}"),
        format!(
            "Browse photos of recent projects completed by {name}{}.",
            area_suffix(site)
        ),
        site.absolute_url("/gallery"),
    )
}

/// Privacy policy. Indexable, but links are not followed.
pub fn privacy_page_seo(site: &SiteConfig) -> PageSeoConfig {
    let name = &site.business.name;
    PageSeoConfig {
        robots: Some("index, nofollow".to_string()),
        ..page(
            format!("Privacy Policy | {name}"),
            format!("How {name} collects, uses and protects your personal information."),
            site.absolute_url("/privacy"),
        )
    }
}

/// Landing page for one service, canonical at `{base_url}/services/{slug}`.
///
/// A missing `meta_description` falls back to a generic description built
/// from the service name, business name and service area.
pub fn service_page_seo(
    site: &SiteConfig,
    service_name: &str,
    meta_description: Option<&str>,
    slug: &str,
) -> PageSeoConfig {
    let name = &site.business.name;
    let description = match meta_description {
        Some(desc) => desc.to_string(),
        None => format!(
            "Professional {} services from {name}{}. Licensed, insured and ready to help. Request a free quote today.",
            service_name.to_lowercase(),
            area_suffix(site)
        ),
    };
    page(
        format!("{service_name} | {name}"),
        description,
        site.absolute_url(&format!("/services/{slug}")),
    )
}

pub fn blog_index_seo(site: &SiteConfig) -> PageSeoConfig {
    let name = &site.business.name;
    page(
        format!("Blog | {name}"),
        format!("Tips, guides and news from the team at {name}."),
        site.absolute_url("/blog"),
    )
}

/// Article page for a blog post: `og:type` is `article` and the post's
/// dates become `article:published_time` / `article:modified_time`.
pub fn blog_post_seo(site: &SiteConfig, post: &BlogPost) -> PageSeoConfig {
    let description = if post.description.is_empty() {
        format!("{} | {}", post.title, site.business.name)
    } else {
        post.description.clone()
    };
    PageSeoConfig {
        og_type: Some("article".to_string()),
        og_image: post.image.clone(),
        published_time: Some(post.publish_date.clone()),
        modified_time: post.modified_date.clone(),
        keywords: (!post.tags.is_empty()).then(|| post.tags.join(", ")),
        ..page(
            format!("{} | {}", post.title, site.business.name),
            description,
            site.absolute_url(&post.path()),
        )
    }
}
