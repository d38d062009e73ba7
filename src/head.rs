//! Head tag rendering.
//!
//! Renders a [`ResolvedTagSet`] and an optional JSON-LD string into the
//! `<head>` elements a page needs. Uses [maud](https://maud.lambda.xyz/), so
//! every attribute value is escaped; only the JSON-LD body is inserted
//! pre-escaped, which is safe because
//! [`schema_to_json_ld`](crate::graph::schema_to_json_ld) never emits `<`.

use crate::tags::ResolvedTagSet;
use maud::{DOCTYPE, Markup, PreEscaped, html};

/// `<title>`, meta, link and JSON-LD elements for one page.
pub fn render_head_tags(tags: &ResolvedTagSet, json_ld: Option<&str>) -> Markup {
    html! {
        title { (tags.title) }
        meta name="description" content=(tags.description);
        meta name="keywords" content=(tags.keywords);
        meta name="robots" content=(tags.robots);
        meta name="author" content=(tags.author);
        link rel="canonical" href=(tags.canonical);

        meta property="og:type" content=(tags.og_type);
        meta property="og:title" content=(tags.og_title);
        meta property="og:description" content=(tags.og_description);
        meta property="og:url" content=(tags.og_url);
        meta property="og:site_name" content=(tags.og_site_name);
        meta property="og:locale" content=(tags.locale);
        @if let Some(image) = &tags.og_image {
            meta property="og:image" content=(image.url);
            meta property="og:image:width" content=(image.width);
            meta property="og:image:height" content=(image.height);
            meta property="og:image:type" content=(image.mime_type);
            meta property="og:image:alt" content=(image.alt);
        }
        @if let Some(published) = &tags.published_time {
            meta property="article:published_time" content=(published);
        }
        @if let Some(modified) = &tags.modified_time {
            meta property="article:modified_time" content=(modified);
        }

        meta name="twitter:card" content=(tags.twitter_card);
        meta name="twitter:title" content=(tags.twitter_title);
        meta name="twitter:description" content=(tags.twitter_description);
        @if let Some(image) = &tags.twitter_image {
            meta name="twitter:image" content=(image);
        }
        @if let Some(site) = &tags.twitter_site {
            meta name="twitter:site" content=(site);
        }

        @if let Some(geo) = &tags.geo {
            meta name="geo.region" content=(geo.region);
            meta name="geo.placename" content=(geo.placename);
            meta name="geo.position" content=(geo.position);
            meta name="ICBM" content=(geo.icbm());
        }

        @if let Some(json) = json_ld {
            script type="application/ld+json" { (PreEscaped(json)) }
        }
    }
}

/// A minimal standalone document around the head tags, for previewing.
pub fn render_preview_document(tags: &ResolvedTagSet, json_ld: Option<&str>) -> Markup {
    let lang = tags.locale.split('_').next().unwrap_or("en");
    html! {
        (DOCTYPE)
        html lang=(lang) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                (render_head_tags(tags, json_ld))
            }
            body {
                h1 { (tags.title) }
                p { (tags.description) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{generate_schema_graph, schema_to_json_ld};
    use crate::schema::generate_faq_schema;
    use crate::tags::generate_complete_seo_tags;
    use crate::test_helpers::{geo_page, test_config};
    use crate::types::{FaqItem, PageSeoConfig};

    fn default_tags() -> ResolvedTagSet {
        generate_complete_seo_tags(&test_config(), &PageSeoConfig::default())
    }

    #[test]
    fn renders_core_tags() {
        let html = render_head_tags(&default_tags(), None).into_string();
        assert!(html.contains("<title>Northside Plumbing</title>"));
        assert!(html.contains(r#"<link rel="canonical" href="https://northside.test">"#));
        assert!(html.contains(r#"<meta property="og:site_name" content="Northside Plumbing">"#));
        assert!(html.contains(r#"<meta name="twitter:card" content="summary_large_image">"#));
        assert!(html.contains(r#"<meta property="og:image:width" content="1200">"#));
    }

    #[test]
    fn geo_tags_only_when_resolved() {
        let without = render_head_tags(&default_tags(), None).into_string();
        assert!(!without.contains("geo.region"));
        assert!(!without.contains("ICBM"));

        let tags = generate_complete_seo_tags(&test_config(), &geo_page());
        let with = render_head_tags(&tags, None).into_string();
        assert!(with.contains(r#"<meta name="geo.region" content="US-IL">"#));
        assert!(with.contains(r#"<meta name="ICBM" content="39.7817, -89.6501">"#));
    }

    #[test]
    fn article_times_rendered_when_present() {
        let page = PageSeoConfig {
            og_type: Some("article".into()),
            published_time: Some("2024-01-10".into()),
            ..Default::default()
        };
        let tags = generate_complete_seo_tags(&test_config(), &page);
        let html = render_head_tags(&tags, None).into_string();
        assert!(html.contains(r#"<meta property="article:published_time" content="2024-01-10">"#));
        assert!(!html.contains("article:modified_time"));
    }

    #[test]
    fn attribute_values_are_escaped() {
        let page = PageSeoConfig {
            title: Some("Pipes & Drains <Best>".into()),
            ..Default::default()
        };
        let tags = generate_complete_seo_tags(&test_config(), &page);
        let html = render_head_tags(&tags, None).into_string();
        assert!(html.contains("<title>Pipes &amp; Drains &lt;Best&gt;</title>"));
        assert!(html.contains(r#"content="Pipes &amp; Drains &lt;Best&gt;""#));
        assert!(!html.contains("<Best>"));
    }

    #[test]
    fn json_ld_script_injected_verbatim() {
        let faq = generate_faq_schema(&[FaqItem {
            question: "Q?".into(),
            answer: "A.".into(),
        }]);
        let json = schema_to_json_ld(&generate_schema_graph(vec![faq.into()]).into());
        let html = render_head_tags(&default_tags(), Some(&json)).into_string();
        assert!(html.contains(&format!(
            r#"<script type="application/ld+json">{json}</script>"#
        )));
    }

    #[test]
    fn preview_document_has_doctype_and_lang() {
        let doc = render_preview_document(&default_tags(), None).into_string();
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains(r#"<html lang="en">"#));
    }
}
