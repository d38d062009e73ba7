//! Site identity configuration.
//!
//! Everything the engine treats as a site-wide default lives here: the base
//! URL, the default share image, locale and robots policy, and the business
//! identity used by the schema builders. Nothing in the engine reads a global;
//! every operation takes a `&SiteConfig`, so tests and alternate deployments
//! can inject a different identity.
//!
//! ## Config File Location
//!
//! `seo.toml` in the config directory (the current directory by default):
//!
//! ```text
//! site/
//! ├── seo.toml          # Site identity (optional, overrides stock defaults)
//! └── posts/
//!     └── 010-gutter-cleaning-checklist.md
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! base_url = "https://www.example.com"   # No trailing slash
//! keywords = "home services, repairs, installation, local contractor"
//! locale = "en_US"
//! robots = "index, follow"
//! # twitter_site = "@examplehome"
//!
//! [business]
//! name = "Example Home Services"
//! description = "Licensed and insured home services ..."
//! telephone = "+1-555-010-0100"
//! email = "info@example.com"
//! area_served = ["Springfield"]
//! opening_hours = ["Mo-Fr 08:00-18:00", "Sa 09:00-14:00"]
//! price_range = "$$"
//! logo = "/images/logo.png"
//! languages = ["English"]
//! same_as = []
//! # latitude = 39.7817
//! # longitude = -89.6501
//!
//! [business.address]
//! street = ""
//! locality = "Springfield"
//! region = "IL"
//! postal_code = ""
//! country = "US"
//!
//! [image]
//! path = "/images/og-default.jpg"  # Relative paths are joined to base_url
//! width = 1200
//! height = 630
//! mime_type = "image/jpeg"
//! alt = "Example Home Services"
//! ```
//!
//! ## Partial Configuration
//!
//! The file is sparse: override just the values you want. Unknown keys are
//! rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Origin used when no `site.base_url` is configured.
pub const DEFAULT_BASE_URL: &str = "https://www.example.com";

/// Site-relative path of the default Open Graph image.
pub const DEFAULT_IMAGE_PATH: &str = "/images/og-default.jpg";

/// Name of the config file looked up in the config directory.
pub const CONFIG_FILENAME: &str = "seo.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site identity loaded from `seo.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Origin, keywords, locale and crawler policy.
    pub site: SiteSection,
    /// Business identity used by titles and schema.org entities.
    pub business: BusinessConfig,
    /// Default share image for Open Graph and Twitter cards.
    pub image: ImageDefaults,
}

impl SiteConfig {
    /// Validate config values are usable for URL and tag generation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let parsed = url::Url::parse(&self.site.base_url).map_err(|e| {
            ConfigError::Validation(format!(
                "site.base_url '{}' is not a valid URL: {e}",
                self.site.base_url
            ))
        })?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
            return Err(ConfigError::Validation(
                "site.base_url must be an http(s) origin".into(),
            ));
        }
        if self.site.base_url.ends_with('/') {
            return Err(ConfigError::Validation(
                "site.base_url must not end with '/'".into(),
            ));
        }
        if self.site.locale.trim().is_empty() {
            return Err(ConfigError::Validation(
                "site.locale must not be empty".into(),
            ));
        }
        if self.image.width == 0 || self.image.height == 0 {
            return Err(ConfigError::Validation(
                "image.width and image.height must be non-zero".into(),
            ));
        }
        if self.business.latitude.is_some() != self.business.longitude.is_some() {
            return Err(ConfigError::Validation(
                "business.latitude and business.longitude must be set together".into(),
            ));
        }
        Ok(())
    }

    /// The configured origin, e.g. `https://www.example.com`.
    pub fn base_url(&self) -> &str {
        &self.site.base_url
    }

    /// Make a site-relative path absolute against the base URL.
    ///
    /// Resolution follows RFC 3986 via [`url::Url::join`], with the base
    /// treated as a directory so a path below the origin is kept:
    ///
    /// - `"https://cdn.example.net/a.jpg"` → unchanged
    /// - `"HTTPS://www.example.com/about"` → `"https://www.example.com/about"`
    /// - `"//cdn.example.net/a.jpg"` → `"https://cdn.example.net/a.jpg"`
    /// - `"/services/roofing"` → `"{base_url}/services/roofing"`
    /// - `"services/roofing"` → `"{base_url}/services/roofing"`
    /// - `""` or `base_url` itself → `"{base_url}"`
    pub fn absolute_url(&self, path: &str) -> String {
        let path = path.trim();
        if path.is_empty() || path == self.site.base_url {
            return self.site.base_url.clone();
        }
        // Rooted paths hang off base_url, not the bare origin
        let reference = if path.starts_with("//") {
            path
        } else {
            path.trim_start_matches('/')
        };
        match self.base_dir_url() {
            Some(base) => match base.join(reference) {
                Ok(joined) => joined.into(),
                Err(e) => {
                    log::debug!("cannot resolve '{path}' against base URL: {e}");
                    format!("{}/{}", self.site.base_url, reference)
                }
            },
            None => format!("{}/{}", self.site.base_url, reference),
        }
    }

    /// `base_url` with a trailing slash, parsed. `None` only for configs
    /// that would fail [`validate`](Self::validate).
    fn base_dir_url(&self) -> Option<url::Url> {
        url::Url::parse(&format!("{}/", self.site.base_url)).ok()
    }

    /// Absolute URL of the default share image, if one is configured.
    pub fn default_image_url(&self) -> Option<String> {
        let path = self.image.path.trim();
        (!path.is_empty()).then(|| self.absolute_url(path))
    }
}

/// Origin and crawler-facing site settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SiteSection {
    /// Absolute origin used to build canonical and Open Graph URLs.
    pub base_url: String,
    /// Default `<meta name="keywords">` content.
    pub keywords: String,
    /// Default Open Graph locale.
    pub locale: String,
    /// Default robots directive.
    pub robots: String,
    /// Twitter handle emitted as `twitter:site`.
    pub twitter_site: Option<String>,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            keywords: "home services, repairs, installation, local contractor".to_string(),
            locale: "en_US".to_string(),
            robots: "index, follow".to_string(),
            twitter_site: None,
        }
    }
}

/// Business identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct BusinessConfig {
    pub name: String,
    pub description: String,
    pub telephone: String,
    pub email: String,
    /// Cities or regions served, most important first.
    pub area_served: Vec<String>,
    pub address: AddressConfig,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// schema.org `openingHours` strings, e.g. `"Mo-Fr 08:00-18:00"`.
    pub opening_hours: Vec<String>,
    pub price_range: Option<String>,
    /// Profile URLs (social, directories) for `sameAs`.
    pub same_as: Vec<String>,
    pub logo: Option<String>,
    /// Languages offered at the contact point.
    pub languages: Vec<String>,
}

impl BusinessConfig {
    /// Primary service area, used in generated copy.
    pub fn primary_area(&self) -> Option<&str> {
        self.area_served.first().map(String::as_str)
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            name: "Example Home Services".to_string(),
            description: "Licensed and insured home services. Free quotes, fair pricing, \
                          and workmanship we stand behind."
                .to_string(),
            telephone: "+1-555-010-0100".to_string(),
            email: "info@example.com".to_string(),
            area_served: vec!["Springfield".to_string()],
            address: AddressConfig::default(),
            latitude: None,
            longitude: None,
            opening_hours: vec![
                "Mo-Fr 08:00-18:00".to_string(),
                "Sa 09:00-14:00".to_string(),
            ],
            price_range: Some("$$".to_string()),
            same_as: vec![],
            logo: Some("/images/logo.png".to_string()),
            languages: vec!["English".to_string()],
        }
    }
}

/// Postal address of the business.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AddressConfig {
    pub street: String,
    pub locality: String,
    pub region: String,
    pub postal_code: String,
    pub country: String,
}

impl Default for AddressConfig {
    fn default() -> Self {
        Self {
            street: String::new(),
            locality: "Springfield".to_string(),
            region: "IL".to_string(),
            postal_code: String::new(),
            country: "US".to_string(),
        }
    }
}

/// Default share image.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ImageDefaults {
    /// Site-relative or absolute URL. Empty disables the default image.
    pub path: String,
    pub width: u32,
    pub height: u32,
    pub mime_type: String,
    pub alt: String,
}

impl Default for ImageDefaults {
    fn default() -> Self {
        Self {
            path: DEFAULT_IMAGE_PATH.to_string(),
            width: 1200,
            height: 630,
            mime_type: "image/jpeg".to_string(),
            alt: "Example Home Services".to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// Base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// Tables merge key-by-key; any other overlay value replaces the base value.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut table), toml::Value::Table(overrides)) => {
            for (key, value) in overrides {
                let merged = match table.remove(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => value,
                };
                table.insert(key, merged);
            }
            toml::Value::Table(table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `seo.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    Ok(Some(toml::from_str(&content)?))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load the site config from `seo.toml` in the given directory.
///
/// Missing file means stock defaults.
pub fn load_config(dir: &Path) -> Result<SiteConfig, ConfigError> {
    let overlay = load_raw_config(dir)?;
    if overlay.is_none() {
        log::debug!(
            "no {} in {}, using stock defaults",
            CONFIG_FILENAME,
            dir.display()
        );
    }
    resolve_config(stock_defaults_value(), overlay)
}

/// Returns a fully-commented stock `seo.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Site SEO Configuration
# ======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Site
# ---------------------------------------------------------------------------
[site]
# Absolute origin for canonical and Open Graph URLs. No trailing slash.
base_url = "https://www.example.com"

# Default <meta name="keywords"> for pages that don't set their own.
keywords = "home services, repairs, installation, local contractor"

# Open Graph locale.
locale = "en_US"

# Default robots directive. Pages such as privacy policies may override it.
robots = "index, follow"

# Twitter handle for twitter:site.
# twitter_site = "@examplehome"

# ---------------------------------------------------------------------------
# Business identity (titles, LocalBusiness, ContactPoint, Service provider)
# ---------------------------------------------------------------------------
[business]
name = "Example Home Services"
description = "Licensed and insured home services. Free quotes, fair pricing, and workmanship we stand behind."
telephone = "+1-555-010-0100"
email = "info@example.com"

# Cities or regions served, most important first.
area_served = ["Springfield"]

# schema.org openingHours strings.
opening_hours = ["Mo-Fr 08:00-18:00", "Sa 09:00-14:00"]

price_range = "$$"
logo = "/images/logo.png"
languages = ["English"]

# Social and directory profile URLs.
same_as = []

# Coordinates for LocalBusiness geo. Set both or neither.
# latitude = 39.7817
# longitude = -89.6501

[business.address]
street = ""
locality = "Springfield"
region = "IL"
postal_code = ""
country = "US"

# ---------------------------------------------------------------------------
# Default share image
# ---------------------------------------------------------------------------
[image]
# Site-relative or absolute. Set to "" to disable the default image.
path = "/images/og-default.jpg"
width = 1200
height = 630
mime_type = "image/jpeg"
alt = "Example Home Services"
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_has_identity() {
        let config = SiteConfig::default();
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.site.locale, "en_US");
        assert_eq!(config.site.robots, "index, follow");
        assert_eq!(config.image.path, DEFAULT_IMAGE_PATH);
        assert_eq!((config.image.width, config.image.height), (1200, 630));
    }

    #[test]
    fn parse_partial_config() {
        let toml = r#"
[business]
name = "Northside Plumbing"
"#;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.business.name, "Northside Plumbing");
        // Defaults preserved
        assert_eq!(config.business.telephone, "+1-555-010-0100");
        assert_eq!(config.site.base_url, DEFAULT_BASE_URL);
    }

    // =========================================================================
    // URL helpers
    // =========================================================================

    #[test]
    fn absolute_url_joins_rooted_path() {
        let config = SiteConfig::default();
        assert_eq!(
            config.absolute_url("/services/roofing"),
            "https://www.example.com/services/roofing"
        );
    }

    #[test]
    fn absolute_url_joins_bare_path() {
        let config = SiteConfig::default();
        assert_eq!(
            config.absolute_url("contact"),
            "https://www.example.com/contact"
        );
    }

    #[test]
    fn absolute_url_passes_through_absolute() {
        let config = SiteConfig::default();
        assert_eq!(
            config.absolute_url("https://cdn.example.net/a.jpg"),
            "https://cdn.example.net/a.jpg"
        );
    }

    #[test]
    fn absolute_url_resolves_scheme_relative() {
        let config = SiteConfig::default();
        assert_eq!(
            config.absolute_url("//cdn.example.net/hero.jpg"),
            "https://cdn.example.net/hero.jpg"
        );
    }

    #[test]
    fn absolute_url_accepts_mixed_case_scheme() {
        let config = SiteConfig::default();
        assert_eq!(
            config.absolute_url("HTTPS://www.example.com/about"),
            "https://www.example.com/about"
        );
        assert_eq!(
            config.absolute_url("Http://cdn.example.net/a.jpg"),
            "http://cdn.example.net/a.jpg"
        );
    }

    #[test]
    fn absolute_url_keeps_base_path_prefix() {
        let mut config = SiteConfig::default();
        config.site.base_url = "https://www.example.com/shop".to_string();
        assert_eq!(
            config.absolute_url("/services/roofing"),
            "https://www.example.com/shop/services/roofing"
        );
        assert_eq!(config.absolute_url("/"), "https://www.example.com/shop/");
        assert_eq!(config.absolute_url(""), "https://www.example.com/shop");
    }

    #[test]
    fn absolute_url_root_keeps_trailing_slash() {
        let config = SiteConfig::default();
        assert_eq!(config.absolute_url("/"), "https://www.example.com/");
    }

    #[test]
    fn absolute_url_empty_is_base() {
        let config = SiteConfig::default();
        assert_eq!(config.absolute_url(""), "https://www.example.com");
        assert_eq!(
            config.absolute_url("https://www.example.com"),
            "https://www.example.com"
        );
    }

    #[test]
    fn default_image_url_is_absolute() {
        let config = SiteConfig::default();
        assert_eq!(
            config.default_image_url().as_deref(),
            Some("https://www.example.com/images/og-default.jpg")
        );
    }

    #[test]
    fn blank_image_path_disables_default_image() {
        let mut config = SiteConfig::default();
        config.image.path = "  ".to_string();
        assert_eq!(config.default_image_url(), None);
    }

    // =========================================================================
    // Validation tests
    // =========================================================================

    #[test]
    fn validate_default_config_passes() {
        assert!(SiteConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_trailing_slash() {
        let mut config = SiteConfig::default();
        config.site.base_url = "https://www.example.com/".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("trailing") || err.to_string().contains("'/'"));
    }

    #[test]
    fn validate_rejects_non_http_scheme() {
        let mut config = SiteConfig::default();
        config.site.base_url = "ftp://example.com".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn validate_rejects_relative_base_url() {
        let mut config = SiteConfig::default();
        config.site.base_url = "/just/a/path".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn validate_rejects_zero_image_size() {
        let mut config = SiteConfig::default();
        config.image.height = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_half_coordinates() {
        let mut config = SiteConfig::default();
        config.business.latitude = Some(39.78);
        assert!(config.validate().is_err());

        config.business.longitude = Some(-89.65);
        assert!(config.validate().is_ok());
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILENAME),
            r#"
[site]
base_url = "https://northsideplumbing.test"

[business.address]
locality = "Shelbyville"
"#,
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.base_url(), "https://northsideplumbing.test");
        assert_eq!(config.business.address.locality, "Shelbyville");
        // Sibling keys in the same table keep their defaults
        assert_eq!(config.business.address.country, "US");
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILENAME), "not valid toml [[[").unwrap();
        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn load_config_validates_values() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILENAME),
            r#"
[site]
base_url = "https://www.example.com/"
"#,
        )
        .unwrap();
        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn unknown_key_rejected_via_load_config() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILENAME),
            r#"
[site]
base_ulr = "https://www.example.com"
"#,
        )
        .unwrap();
        assert!(load_config(tmp.path()).is_err());
    }

    // =========================================================================
    // merge_toml tests
    // =========================================================================

    #[test]
    fn merge_toml_deep_nested() {
        let base: toml::Value = toml::from_str(
            r#"
[business.address]
locality = "Springfield"
country = "US"
"#,
        )
        .unwrap();
        let overlay: toml::Value = toml::from_str(
            r#"
[business.address]
locality = "Capital City"
"#,
        )
        .unwrap();
        let merged = merge_toml(base, overlay);
        let address = merged.get("business").unwrap().get("address").unwrap();
        assert_eq!(address.get("locality").unwrap().as_str(), Some("Capital City"));
        assert_eq!(address.get("country").unwrap().as_str(), Some("US"));
    }

    #[test]
    fn merge_toml_arrays_replace() {
        let base: toml::Value = toml::from_str(r#"area_served = ["A", "B"]"#).unwrap();
        let overlay: toml::Value = toml::from_str(r#"area_served = ["C"]"#).unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged.get("area_served").unwrap().as_array().unwrap().len(), 1);
    }

    // =========================================================================
    // stock config tests
    // =========================================================================

    #[test]
    fn stock_config_toml_roundtrips_to_defaults() {
        let config: SiteConfig = toml::from_str(stock_config_toml()).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn stock_defaults_value_has_all_sections() {
        let val = stock_defaults_value();
        assert!(val.get("site").is_some());
        assert!(val.get("business").is_some());
        assert!(val.get("image").is_some());
    }

    #[test]
    fn resolve_config_with_no_overlay() {
        let config = resolve_config(stock_defaults_value(), None).unwrap();
        assert_eq!(config, SiteConfig::default());
    }
}
