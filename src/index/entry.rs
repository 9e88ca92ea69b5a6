//! Catalog entry: one record per indexed source file.

use std::borrow::Cow;

use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::frontmatter::JsonMap;

/// Key the indexer fills with the source file name.
pub const ID_KEY: &str = "id";
/// Primary sort key.
pub const ORDER_KEY: &str = "order";
/// Secondary sort key.
pub const TITLE_KEY: &str = "title";

/// A single catalog record.
///
/// Serializes as a flat JSON object: `id` first, then every front-matter
/// key in declaration order. Front-matter values are passed through as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CatalogEntry {
    fields: JsonMap,
}

impl CatalogEntry {
    /// Build an entry for `file_name`, merging `metadata` over the generated `id`.
    ///
    /// A metadata `id` replaces the file name but keeps the first position.
    pub fn new(file_name: &str, metadata: JsonMap) -> Self {
        let mut fields = JsonMap::with_capacity(metadata.len() + 1);
        fields.insert(ID_KEY.to_string(), JsonValue::String(file_name.to_string()));
        for (key, value) in metadata {
            fields.insert(key, value);
        }
        Self { fields }
    }

    pub fn id(&self) -> Option<&JsonValue> {
        self.fields.get(ID_KEY)
    }

    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.fields.get(key)
    }

    #[cfg(test)]
    pub fn fields(&self) -> &JsonMap {
        &self.fields
    }

    /// Numeric value of `order`.
    ///
    /// Numeric strings count as numbers; anything else has no order.
    pub fn order_key(&self) -> Option<f64> {
        match self.fields.get(ORDER_KEY)? {
            JsonValue::Number(n) => n.as_f64(),
            JsonValue::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            _ => None,
        }
    }

    /// Text of `title`. Numbers and booleans use their JSON text.
    pub fn title_key(&self) -> Option<Cow<'_, str>> {
        match self.fields.get(TITLE_KEY)? {
            JsonValue::String(s) => Some(Cow::Borrowed(s)),
            JsonValue::Number(n) => Some(Cow::Owned(n.to_string())),
            JsonValue::Bool(b) => Some(Cow::Owned(b.to_string())),
            _ => None,
        }
    }
}
