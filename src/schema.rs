//! schema.org structured data builders.
//!
//! One free function per schema.org type the site publishes. Each takes
//! plain data (plus the site identity where the type references the
//! business) and returns a typed value that serializes to the JSON-LD shape
//! search engines expect. Wrap results in [`Schema`] (every builder output
//! has a `From` impl) to compose them with
//! [`generate_schema_graph`](crate::graph::generate_schema_graph).
//!
//! ## Linking
//!
//! The business is a single node with `@id` `{base_url}/#business`.
//! `Service.provider`, `BlogPosting.author`/`publisher` and `WebSite.publisher`
//! carry that same `@id`, so a graph containing the `LocalBusiness` node
//! resolves them to one entity.
//!
//! ## Garbage in, garbage out
//!
//! Builders never fail. Empty inputs produce structurally valid but empty
//! output (an empty `itemListElement`, no `mainEntity`); dates and URLs are
//! passed through without validation.

use crate::config::SiteConfig;
use crate::content::{markdown_to_plain_text, word_count};
use crate::types::{BlogPost, BreadcrumbItem, FaqItem};
use serde::Serialize;

/// A schema.org entity, tagged with its `@type` when serialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "@type")]
pub enum Schema {
    BreadcrumbList(BreadcrumbList),
    Service(Service),
    #[serde(rename = "FAQPage")]
    FaqPage(FaqPage),
    ContactPoint(ContactPoint),
    BlogPosting(BlogPosting),
    LocalBusiness(LocalBusiness),
    WebSite(WebSite),
}

impl Schema {
    /// The `@type` this entity serializes with.
    pub fn type_name(&self) -> &'static str {
        match self {
            Schema::BreadcrumbList(_) => "BreadcrumbList",
            Schema::Service(_) => "Service",
            Schema::FaqPage(_) => "FAQPage",
            Schema::ContactPoint(_) => "ContactPoint",
            Schema::BlogPosting(_) => "BlogPosting",
            Schema::LocalBusiness(_) => "LocalBusiness",
            Schema::WebSite(_) => "WebSite",
        }
    }
}

macro_rules! impl_into_schema {
    ($($ty:ident),* $(,)?) => {
        $(
            impl From<$ty> for Schema {
                fn from(value: $ty) -> Self {
                    Schema::$ty(value)
                }
            }
        )*
    };
}

impl_into_schema!(
    BreadcrumbList,
    Service,
    FaqPage,
    ContactPoint,
    BlogPosting,
    LocalBusiness,
    WebSite,
);

/// `@id` of the business node.
pub fn business_id(site: &SiteConfig) -> String {
    format!("{}/#business", site.base_url())
}

/// `@id` of the website node.
pub fn website_id(site: &SiteConfig) -> String {
    format!("{}/#website", site.base_url())
}

// ============================================================================
// Shared nested nodes
// ============================================================================

/// Reference to the business node, with enough inline data to stand alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BusinessRef {
    #[serde(rename = "@type")]
    kind: &'static str,
    #[serde(rename = "@id")]
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub telephone: String,
}

impl BusinessRef {
    fn new(site: &SiteConfig) -> Self {
        Self {
            kind: "LocalBusiness",
            id: business_id(site),
            name: site.business.name.clone(),
            url: site.absolute_url("/"),
            telephone: site.business.telephone.clone(),
        }
    }
}

/// Bare `@id` pointer to another node in the graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeRef {
    #[serde(rename = "@id")]
    pub id: String,
}

// ============================================================================
// BreadcrumbList
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreadcrumbList {
    pub item_list_element: Vec<ListItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    #[serde(rename = "@type")]
    kind: &'static str,
    /// 1-based position in the trail.
    pub position: usize,
    pub name: String,
    pub item: String,
}

/// Breadcrumb trail in the given order, positions 1..=n. URLs are used as
/// given; supply a complete, correctly ordered trail.
pub fn generate_breadcrumb_schema(items: &[BreadcrumbItem]) -> BreadcrumbList {
    BreadcrumbList {
        item_list_element: items
            .iter()
            .enumerate()
            .map(|(idx, crumb)| ListItem {
                kind: "ListItem",
                position: idx + 1,
                name: crumb.name.clone(),
                item: crumb.url.clone(),
            })
            .collect(),
    }
}

/// `Home › Services › {service_name}`.
pub fn get_breadcrumbs_for_service(
    site: &SiteConfig,
    service_name: &str,
    service_url: &str,
) -> Vec<BreadcrumbItem> {
    vec![
        BreadcrumbItem::new("Home", site.absolute_url("/")),
        BreadcrumbItem::new("Services", site.absolute_url("/services")),
        BreadcrumbItem::new(service_name, site.absolute_url(service_url)),
    ]
}

/// `Home › Blog › {post title}`.
pub fn get_breadcrumbs_for_post(site: &SiteConfig, post: &BlogPost) -> Vec<BreadcrumbItem> {
    vec![
        BreadcrumbItem::new("Home", site.absolute_url("/")),
        BreadcrumbItem::new("Blog", site.absolute_url("/blog")),
        BreadcrumbItem::new(post.title.clone(), site.absolute_url(&post.path())),
    ]
}

// ============================================================================
// Service
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub name: String,
    pub service_type: String,
    pub description: String,
    pub url: String,
    pub provider: BusinessRef,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub area_served: Vec<String>,
}

pub fn generate_service_schema(
    site: &SiteConfig,
    name: &str,
    description: &str,
    url: &str,
) -> Service {
    Service {
        name: name.to_string(),
        service_type: name.to_string(),
        description: description.to_string(),
        url: site.absolute_url(url),
        provider: BusinessRef::new(site),
        area_served: site.business.area_served.clone(),
    }
}

// ============================================================================
// FAQPage
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqPage {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub main_entity: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(rename = "@type")]
    kind: &'static str,
    pub name: String,
    pub accepted_answer: Answer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Answer {
    #[serde(rename = "@type")]
    kind: &'static str,
    pub text: String,
}

/// One `Question` per item, in order. Repeated questions are kept.
pub fn generate_faq_schema(faqs: &[FaqItem]) -> FaqPage {
    FaqPage {
        main_entity: faqs
            .iter()
            .map(|faq| Question {
                kind: "Question",
                name: faq.question.clone(),
                accepted_answer: Answer {
                    kind: "Answer",
                    text: faq.answer.clone(),
                },
            })
            .collect(),
    }
}

// ============================================================================
// ContactPoint
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPoint {
    pub telephone: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub email: String,
    pub contact_type: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub area_served: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub available_language: Vec<String>,
}

/// Customer-service contact point. Depends only on the site identity.
pub fn generate_contact_point_schema(site: &SiteConfig) -> ContactPoint {
    ContactPoint {
        telephone: site.business.telephone.clone(),
        email: site.business.email.clone(),
        contact_type: "customer service".to_string(),
        area_served: site.business.area_served.clone(),
        available_language: site.business.languages.clone(),
    }
}

// ============================================================================
// BlogPosting
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPosting {
    pub headline: String,
    pub description: String,
    pub article_body: String,
    pub word_count: usize,
    pub date_published: String,
    pub date_modified: String,
    pub url: String,
    pub main_entity_of_page: WebPageRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub author: BusinessRef,
    pub publisher: BusinessRef,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebPageRef {
    #[serde(rename = "@type")]
    kind: &'static str,
    #[serde(rename = "@id")]
    pub id: String,
}

/// Article schema for a blog post.
///
/// Dates are passed through verbatim; supply ISO-8601 strings. A missing
/// `modified_date` repeats `publish_date`. `body` is markdown; the schema
/// carries its plain-text rendering and word count. `url` is
/// `base_url + path`.
pub fn generate_blog_post_schema(
    site: &SiteConfig,
    title: &str,
    description: &str,
    body: &str,
    publish_date: &str,
    modified_date: Option<&str>,
    path: &str,
) -> BlogPosting {
    let url = site.absolute_url(path);
    let article_body = markdown_to_plain_text(body);
    BlogPosting {
        headline: title.to_string(),
        description: description.to_string(),
        word_count: word_count(&article_body),
        article_body,
        date_published: publish_date.to_string(),
        date_modified: modified_date.unwrap_or(publish_date).to_string(),
        main_entity_of_page: WebPageRef {
            kind: "WebPage",
            id: url.clone(),
        },
        url,
        image: site.default_image_url(),
        author: BusinessRef::new(site),
        publisher: BusinessRef::new(site),
    }
}

// ============================================================================
// LocalBusiness
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalBusiness {
    #[serde(rename = "@id")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub url: String,
    pub telephone: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_range: Option<String>,
    pub address: PostalAddress,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo: Option<GeoCoordinates>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub opening_hours: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub area_served: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub same_as: Vec<String>,
    /// Always a [`Schema::ContactPoint`], nested so it carries its `@type`.
    pub contact_point: Box<Schema>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
    #[serde(rename = "@type")]
    kind: &'static str,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub street_address: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub address_locality: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub address_region: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub postal_code: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub address_country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoCoordinates {
    #[serde(rename = "@type")]
    kind: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

/// The business node every other entity links to.
pub fn generate_local_business_schema(site: &SiteConfig) -> LocalBusiness {
    let business = &site.business;
    let address = &business.address;
    LocalBusiness {
        id: business_id(site),
        name: business.name.clone(),
        description: business.description.clone(),
        url: site.absolute_url("/"),
        telephone: business.telephone.clone(),
        email: business.email.clone(),
        image: site.default_image_url(),
        logo: business.logo.as_deref().map(|logo| site.absolute_url(logo)),
        price_range: business.price_range.clone(),
        address: PostalAddress {
            kind: "PostalAddress",
            street_address: address.street.clone(),
            address_locality: address.locality.clone(),
            address_region: address.region.clone(),
            postal_code: address.postal_code.clone(),
            address_country: address.country.clone(),
        },
        geo: business
            .latitude
            .zip(business.longitude)
            .map(|(latitude, longitude)| GeoCoordinates {
                kind: "GeoCoordinates",
                latitude,
                longitude,
            }),
        opening_hours: business.opening_hours.clone(),
        area_served: business.area_served.clone(),
        same_as: business.same_as.clone(),
        contact_point: Box::new(generate_contact_point_schema(site).into()),
    }
}

// ============================================================================
// WebSite
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebSite {
    #[serde(rename = "@id")]
    pub id: String,
    pub name: String,
    pub url: String,
    /// BCP 47 tag derived from the locale (`en_US` → `en-US`).
    pub in_language: String,
    pub publisher: NodeRef,
}

pub fn generate_website_schema(site: &SiteConfig) -> WebSite {
    WebSite {
        id: website_id(site),
        name: site.business.name.clone(),
        url: site.absolute_url("/"),
        in_language: site.site.locale.replace('_', "-"),
        publisher: NodeRef {
            id: business_id(site),
        },
    }
}
