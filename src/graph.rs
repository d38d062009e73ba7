//! JSON-LD documents.
//!
//! [`generate_schema_graph`] bundles schema entities into one `@graph`
//! document so a page needs a single `<script type="application/ld+json">`.
//! Composition is a pass-through: entities keep the order they were given
//! in and nothing is deduplicated or checked.
//!
//! [`schema_to_json_ld`] renders a graph, or a single entity with its own
//! `@context`, to the string the head renderer injects. The output is
//! deterministic: keys follow the struct declaration order, so equal input
//! always gives byte-identical output.

use crate::schema::Schema;
use serde::Serialize;
use serde_json::{Map, Value};

/// The JSON-LD `@context` for schema.org vocabularies.
pub const SCHEMA_CONTEXT: &str = "https://schema.org";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaGraph {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@graph")]
    pub graph: Vec<Schema>,
}

/// Wrap entities in a `@graph`, preserving order.
pub fn generate_schema_graph(schemas: Vec<Schema>) -> SchemaGraph {
    SchemaGraph {
        context: SCHEMA_CONTEXT,
        graph: schemas,
    }
}

/// Anything that can be rendered as a top-level JSON-LD document.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonLd {
    Graph(SchemaGraph),
    Single(Schema),
}

impl From<SchemaGraph> for JsonLd {
    fn from(graph: SchemaGraph) -> Self {
        JsonLd::Graph(graph)
    }
}

impl From<Schema> for JsonLd {
    fn from(schema: Schema) -> Self {
        JsonLd::Single(schema)
    }
}

impl JsonLd {
    /// The document as a JSON value. A single entity gets `@context` as its
    /// first key.
    pub fn to_value(&self) -> Value {
        match self {
            JsonLd::Graph(graph) => to_value_infallible(graph),
            JsonLd::Single(schema) => {
                let mut doc = Map::new();
                doc.insert("@context".to_string(), Value::from(SCHEMA_CONTEXT));
                if let Value::Object(fields) = to_value_infallible(schema) {
                    doc.extend(fields);
                }
                Value::Object(doc)
            }
        }
    }
}

/// Schema types are plain structs of strings, numbers and vectors, with no
/// maps and no custom `Serialize` impls.
fn to_value_infallible<T: Serialize>(value: &T) -> Value {
    serde_json::to_value(value).expect("schema types must serialize")
}

/// Serialize a JSON-LD document to compact JSON safe to place inside a
/// `<script>` element.
///
/// `<`, `>` and `&` only ever occur inside JSON strings, where their
/// `\u` escapes are equivalent, so a value like `"</script>"` cannot close
/// the element early.
pub fn schema_to_json_ld(doc: &JsonLd) -> String {
    let json = doc.to_value().to_string();
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            c => out.push(c),
        }
    }
    out
}
