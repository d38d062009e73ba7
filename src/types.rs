//! Shared input types consumed by the registry, resolver, builders and ranker.
//!
//! These are plain data: pages and content loaders construct them, the
//! engine only reads them.

use serde::{Deserialize, Serialize};

/// Page-level SEO settings. Every field is optional; `None` means "use the
/// site default" when passed through
/// [`generate_complete_seo_tags`](crate::tags::generate_complete_seo_tags).
///
/// Deserializes from TOML or JSON with snake_case keys, so a page override
/// file can be as small as:
///
/// ```toml
/// title = "Emergency Plumbing | Northside Plumbing"
/// robots = "noindex, follow"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageSeoConfig {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Absolute URL or site-relative path.
    pub canonical: Option<String>,
    pub keywords: Option<String>,
    pub og_image: Option<String>,
    pub og_image_width: Option<u32>,
    pub og_image_height: Option<u32>,
    pub og_image_type: Option<String>,
    pub og_image_alt: Option<String>,
    pub twitter_image: Option<String>,
    pub robots: Option<String>,
    pub geo_region: Option<String>,
    pub geo_placename: Option<String>,
    /// `"lat;lon"`, as used by the `geo.position` meta tag.
    pub geo_position: Option<String>,
    pub locale: Option<String>,
    pub og_type: Option<String>,
    pub published_time: Option<String>,
    pub modified_time: Option<String>,
    pub author: Option<String>,
    pub og_title: Option<String>,
    pub og_description: Option<String>,
    pub twitter_title: Option<String>,
    pub twitter_description: Option<String>,
    pub twitter_card: Option<String>,
}

impl PageSeoConfig {
    /// Lay `overrides` on top of `self`, field by field. A field set in
    /// `overrides` wins; unset fields keep the value from `self`.
    ///
    /// Used to customize an archetype factory's result:
    ///
    /// ```text
    /// contact_page_seo(&config).overlay(page_toml)
    /// ```
    pub fn overlay(self, overrides: PageSeoConfig) -> PageSeoConfig {
        PageSeoConfig {
            title: overrides.title.or(self.title),
            description: overrides.description.or(self.description),
            canonical: overrides.canonical.or(self.canonical),
            keywords: overrides.keywords.or(self.keywords),
            og_image: overrides.og_image.or(self.og_image),
            og_image_width: overrides.og_image_width.or(self.og_image_width),
            og_image_height: overrides.og_image_height.or(self.og_image_height),
            og_image_type: overrides.og_image_type.or(self.og_image_type),
            og_image_alt: overrides.og_image_alt.or(self.og_image_alt),
            twitter_image: overrides.twitter_image.or(self.twitter_image),
            robots: overrides.robots.or(self.robots),
            geo_region: overrides.geo_region.or(self.geo_region),
            geo_placename: overrides.geo_placename.or(self.geo_placename),
            geo_position: overrides.geo_position.or(self.geo_position),
            locale: overrides.locale.or(self.locale),
            og_type: overrides.og_type.or(self.og_type),
            published_time: overrides.published_time.or(self.published_time),
            modified_time: overrides.modified_time.or(self.modified_time),
            author: overrides.author.or(self.author),
            og_title: overrides.og_title.or(self.og_title),
            og_description: overrides.og_description.or(self.og_description),
            twitter_title: overrides.twitter_title.or(self.twitter_title),
            twitter_description: overrides.twitter_description.or(self.twitter_description),
            twitter_card: overrides.twitter_card.or(self.twitter_card),
        }
    }
}

/// One step of a breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbItem {
    pub name: String,
    pub url: String,
}

impl BreadcrumbItem {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// A question/answer pair for an FAQ page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

/// A blog post as loaded by [`content::load_posts`](crate::content::load_posts).
///
/// Only `id` and `tags` matter to the related-post ranker; the rest feeds
/// page tags and the `BlogPosting` schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    /// Stable identity. Defaults to the slug when front matter omits it.
    pub id: String,
    /// URL slug (filename stem with number prefix stripped)
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// ISO-8601 date, passed through verbatim.
    pub publish_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Raw markdown body
    #[serde(default)]
    pub body: String,
}

impl BlogPost {
    /// Site-relative path of the post page.
    pub fn path(&self) -> String {
        format!("/blog/{}", self.slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_prefers_overrides() {
        let base = PageSeoConfig {
            title: Some("Contact".into()),
            description: Some("Reach us".into()),
            ..Default::default()
        };
        let overrides = PageSeoConfig {
            title: Some("Contact Northside".into()),
            robots: Some("noindex".into()),
            ..Default::default()
        };
        let merged = base.overlay(overrides);
        assert_eq!(merged.title.as_deref(), Some("Contact Northside"));
        assert_eq!(merged.description.as_deref(), Some("Reach us"));
        assert_eq!(merged.robots.as_deref(), Some("noindex"));
    }

    #[test]
    fn overlay_with_empty_overrides_is_identity() {
        let base = PageSeoConfig {
            canonical: Some("/faq".into()),
            geo_region: Some("US-IL".into()),
            ..Default::default()
        };
        assert_eq!(base.clone().overlay(PageSeoConfig::default()), base);
    }

    #[test]
    fn page_config_parses_from_toml() {
        let page: PageSeoConfig = toml::from_str(
            r#"
title = "Emergency Plumbing"
og_image_width = 800
"#,
        )
        .unwrap();
        assert_eq!(page.title.as_deref(), Some("Emergency Plumbing"));
        assert_eq!(page.og_image_width, Some(800));
        assert_eq!(page.description, None);
    }

    #[test]
    fn page_config_rejects_unknown_keys() {
        let result: Result<PageSeoConfig, _> = toml::from_str(r#"ogImage = "/a.jpg""#);
        assert!(result.is_err());
    }

    #[test]
    fn blog_post_path_uses_slug() {
        let post = BlogPost {
            id: "1".into(),
            slug: "spring-gutter-checklist".into(),
            title: "Spring Gutter Checklist".into(),
            description: String::new(),
            tags: vec![],
            publish_date: "2024-03-01".into(),
            modified_date: None,
            image: None,
            body: String::new(),
        };
        assert_eq!(post.path(), "/blog/spring-gutter-checklist");
    }
}
