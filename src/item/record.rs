//! Product records as delivered by the catalog API.

use super::SearchableItem;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A product record from a seller's inventory.
///
/// `title` and `description` are parsed leniently: a missing, `null`, or
/// non-string value becomes empty rather than failing the whole catalog.
/// Every other field is kept verbatim in `extra` and written back out on
/// serialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    #[serde(default, deserialize_with = "lenient_title")]
    pub title: String,
    #[serde(
        default,
        deserialize_with = "lenient_description",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CatalogItem {
    /// Creates an item with just a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl SearchableItem for CatalogItem {
    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

fn lenient_title<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(lenient_description(deserializer)?.unwrap_or_default())
}

fn lenient_description<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(text) => Ok(Some(text)),
        _ => Ok(None),
    }
}
