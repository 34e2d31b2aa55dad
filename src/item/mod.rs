//! The item shape the ranking engine reads, and the catalog record type.

pub(crate) mod record;

pub use record::CatalogItem;

use serde_json::Value;

/// A record the ranking engine can score.
///
/// Only two text fields are ever read. Everything else a product carries
/// (pricing, variants, inventory, media) is invisible to the engine.
pub trait SearchableItem {
    /// The item's title. Return `""` when there is none.
    fn title(&self) -> &str;

    /// The item's description, if it has one.
    fn description(&self) -> Option<&str> {
        None
    }
}

impl<T: SearchableItem + ?Sized> SearchableItem for &T {
    fn title(&self) -> &str {
        (**self).title()
    }

    fn description(&self) -> Option<&str> {
        (**self).description()
    }
}

/// Untyped JSON records: `title` and `description` keys, anything that is
/// not a string reads as absent.
impl SearchableItem for Value {
    fn title(&self) -> &str {
        self.get("title").and_then(Value::as_str).unwrap_or_default()
    }

    fn description(&self) -> Option<&str> {
        self.get("description").and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!({"title": "Red Shirt", "description": "Cotton"}), "Red Shirt", Some("Cotton"))]
    #[case(json!({"title": "Red Shirt"}), "Red Shirt", None)]
    #[case(json!({"title": null, "description": null}), "", None)]
    #[case(json!({"title": 42, "description": ["a"]}), "", None)]
    #[case(json!({}), "", None)]
    #[case(json!("not an object"), "", None)]
    fn test_json_value_fields(
        #[case] value: Value,
        #[case] title: &str,
        #[case] description: Option<&str>,
    ) {
        check!(value.title() == title);
        check!(value.description() == description);
    }

    #[test]
    fn test_reference_forwards() {
        let value = json!({"title": "Blue Shirt", "description": "Linen"});
        let by_ref = &value;
        check!(SearchableItem::title(&by_ref) == "Blue Shirt");
        check!(SearchableItem::description(&by_ref) == Some("Linen"));
    }
}
