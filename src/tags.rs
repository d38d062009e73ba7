//! Page tag resolution.
//!
//! Turns a sparse [`PageSeoConfig`] into a [`ResolvedTagSet`]: every meta,
//! Open Graph, Twitter and geo value a page head needs, with all defaults
//! applied. The merge happens in exactly one place,
//! [`generate_complete_seo_tags`], so default lookups never leak into page
//! code.
//!
//! ## Resolution rules
//!
//! | Output | Source (first present wins) |
//! |--------|-----------------------------|
//! | `title` | page → business name |
//! | `description` | page → business description |
//! | `canonical`, `og_url` | page (made absolute) → base URL |
//! | `og_title`, `twitter_title` | explicit override → resolved `title` |
//! | `og_description`, `twitter_description` | explicit override → resolved `description` |
//! | `og_image.url` | page image → site default image → *no image* |
//! | `og_image.{width,height,type,alt}` | page → site image defaults (only if a URL resolved) |
//! | `twitter_image` | page → resolved `og_image.url` |
//! | `twitter_card` | page → `summary_large_image` |
//! | `geo` | all three geo fields from the page, or nothing |
//!
//! Resolution never fails. An empty `PageSeoConfig` yields a usable tag set
//! built from the site config alone.

use crate::config::SiteConfig;
use crate::types::PageSeoConfig;
use serde::Serialize;

/// Twitter card type used when a page doesn't pick one.
pub const DEFAULT_TWITTER_CARD: &str = "summary_large_image";

/// Open Graph type used when a page doesn't pick one.
pub const DEFAULT_OG_TYPE: &str = "website";

/// Fully-resolved head tags for one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedTagSet {
    pub title: String,
    pub description: String,
    pub canonical: String,
    pub keywords: String,
    pub robots: String,
    pub locale: String,
    pub author: String,
    pub og_type: String,
    pub og_title: String,
    pub og_description: String,
    pub og_url: String,
    pub og_site_name: String,
    /// `None` only when neither page nor site supplies a usable image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_image: Option<OgImage>,
    pub twitter_card: String,
    pub twitter_title: String,
    pub twitter_description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_site: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_time: Option<String>,
    /// Present only when region, placename and position were all supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo: Option<GeoTags>,
}

/// The `og:image` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OgImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
    #[serde(rename = "type")]
    pub mime_type: String,
    pub alt: String,
}

/// The `geo.*` meta block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeoTags {
    pub region: String,
    pub placename: String,
    pub position: String,
}

impl GeoTags {
    /// `ICBM` meta content: the position with `;` replaced by `, `.
    pub fn icbm(&self) -> String {
        self.position
            .split(';')
            .map(str::trim)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Resolve a page config against the site config.
pub fn generate_complete_seo_tags(site: &SiteConfig, page: &PageSeoConfig) -> ResolvedTagSet {
    let title = page
        .title
        .clone()
        .unwrap_or_else(|| site.business.name.clone());
    let description = page
        .description
        .clone()
        .unwrap_or_else(|| site.business.description.clone());
    let canonical = page
        .canonical
        .as_deref()
        .map(|c| site.absolute_url(c))
        .unwrap_or_else(|| site.base_url().to_string());

    let og_image = resolve_og_image(site, page);
    let twitter_image = page
        .twitter_image
        .as_deref()
        .filter(|url| !url.trim().is_empty())
        .map(|url| site.absolute_url(url))
        .or_else(|| og_image.as_ref().map(|img| img.url.clone()));

    ResolvedTagSet {
        og_title: page.og_title.clone().unwrap_or_else(|| title.clone()),
        og_description: page
            .og_description
            .clone()
            .unwrap_or_else(|| description.clone()),
        twitter_title: page.twitter_title.clone().unwrap_or_else(|| title.clone()),
        twitter_description: page
            .twitter_description
            .clone()
            .unwrap_or_else(|| description.clone()),
        og_url: canonical.clone(),
        og_site_name: site.business.name.clone(),
        keywords: page
            .keywords
            .clone()
            .unwrap_or_else(|| site.site.keywords.clone()),
        robots: page
            .robots
            .clone()
            .unwrap_or_else(|| site.site.robots.clone()),
        locale: page
            .locale
            .clone()
            .unwrap_or_else(|| site.site.locale.clone()),
        author: page
            .author
            .clone()
            .unwrap_or_else(|| site.business.name.clone()),
        og_type: page
            .og_type
            .clone()
            .unwrap_or_else(|| DEFAULT_OG_TYPE.to_string()),
        twitter_card: page
            .twitter_card
            .clone()
            .unwrap_or_else(|| DEFAULT_TWITTER_CARD.to_string()),
        twitter_site: site.site.twitter_site.clone(),
        published_time: page.published_time.clone(),
        modified_time: page.modified_time.clone(),
        geo: resolve_geo(page),
        og_image,
        twitter_image,
        title,
        description,
        canonical,
    }
}

/// Page image first, then the site default. Blank URLs count as absent.
fn resolve_og_image(site: &SiteConfig, page: &PageSeoConfig) -> Option<OgImage> {
    let url = page
        .og_image
        .as_deref()
        .filter(|url| !url.trim().is_empty())
        .map(|url| site.absolute_url(url))
        .or_else(|| site.default_image_url())?;

    Some(OgImage {
        url,
        width: page.og_image_width.unwrap_or(site.image.width),
        height: page.og_image_height.unwrap_or(site.image.height),
        mime_type: page
            .og_image_type
            .clone()
            .unwrap_or_else(|| site.image.mime_type.clone()),
        alt: page
            .og_image_alt
            .clone()
            .unwrap_or_else(|| site.image.alt.clone()),
    })
}

fn resolve_geo(page: &PageSeoConfig) -> Option<GeoTags> {
    match (&page.geo_region, &page.geo_placename, &page.geo_position) {
        (Some(region), Some(placename), Some(position)) => Some(GeoTags {
            region: region.clone(),
            placename: placename.clone(),
            position: position.clone(),
        }),
        (None, None, None) => None,
        _ => {
            log::debug!("dropping incomplete geo tags: region, placename and position are all required");
            None
        }
    }
}

impl From<&ResolvedTagSet> for PageSeoConfig {
    /// Spell out every resolved value as an explicit page setting.
    ///
    /// Resolving the result again yields the same tag set.
    fn from(tags: &ResolvedTagSet) -> Self {
        let image = tags.og_image.as_ref();
        let geo = tags.geo.as_ref();
        PageSeoConfig {
            title: Some(tags.title.clone()),
            description: Some(tags.description.clone()),
            canonical: Some(tags.canonical.clone()),
            keywords: Some(tags.keywords.clone()),
            og_image: image.map(|i| i.url.clone()),
            og_image_width: image.map(|i| i.width),
            og_image_height: image.map(|i| i.height),
            og_image_type: image.map(|i| i.mime_type.clone()),
            og_image_alt: image.map(|i| i.alt.clone()),
            twitter_image: tags.twitter_image.clone(),
            robots: Some(tags.robots.clone()),
            geo_region: geo.map(|g| g.region.clone()),
            geo_placename: geo.map(|g| g.placename.clone()),
            geo_position: geo.map(|g| g.position.clone()),
            locale: Some(tags.locale.clone()),
            og_type: Some(tags.og_type.clone()),
            published_time: tags.published_time.clone(),
            modified_time: tags.modified_time.clone(),
            author: Some(tags.author.clone()),
            og_title: Some(tags.og_title.clone()),
            og_description: Some(tags.og_description.clone()),
            twitter_title: Some(tags.twitter_title.clone()),
            twitter_description: Some(tags.twitter_description.clone()),
            twitter_card: Some(tags.twitter_card.clone()),
        }
    }
}
