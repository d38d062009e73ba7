//! Shared test fixtures for the site-seo test suite.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let config = test_config();
//! let posts = vec![post("1", &["drains"]), post("2", &["drains", "diy"])];
//! ```

use crate::config::SiteConfig;
use crate::types::{BlogPost, PageSeoConfig};

/// A site identity that differs from the stock defaults in every field the
/// tests look at, so a passing test proves the value came from the config.
pub fn test_config() -> SiteConfig {
    let mut config = SiteConfig::default();
    config.site.base_url = "https://northside.test".to_string();
    config.business.name = "Northside Plumbing".to_string();
    config.business.description =
        "Family-owned plumbing repair and installation since 1998.".to_string();
    config.business.telephone = "+1-217-555-0142".to_string();
    config.business.email = "service@northside.test".to_string();
    config.business.area_served = vec!["Springfield".to_string(), "Chatham".to_string()];
    config.business.latitude = Some(39.7817);
    config.business.longitude = Some(-89.6501);
    config.image.alt = "Northside Plumbing service van".to_string();
    config
}

/// A page with all three geo fields set.
pub fn geo_page() -> PageSeoConfig {
    PageSeoConfig {
        geo_region: Some("US-IL".to_string()),
        geo_placename: Some("Springfield".to_string()),
        geo_position: Some("39.7817;-89.6501".to_string()),
        ..Default::default()
    }
}

/// Minimal post: slug `post-{id}`, published `2024-05-{id}` (zero-padded).
pub fn post(id: &str, tags: &[&str]) -> BlogPost {
    BlogPost {
        id: id.to_string(),
        slug: format!("post-{id}"),
        title: format!("Post {id}"),
        description: String::new(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        publish_date: format!("2024-05-{id:0>2}"),
        modified_date: None,
        image: None,
        body: String::new(),
    }
}
