//! Normalization of array item schemas.
//!
//! Some generators emit array properties whose `items` mapping carries neither
//! a `type` nor a `$ref`. Downstream tooling rejects those, so every such
//! `items` mapping under `components.schemas.*.properties` gets `type: string`.
//! Nothing else in the document is touched.

use std::fmt;

use serde_json::{Map as JsonMap, Value as JsonValue};

/// Type injected into untyped array items
pub const DEFAULT_ITEMS_TYPE: &str = "string";

/// One `items` mapping that was given a default type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repair {
    pub schema: String,
    pub property: String,
}

impl fmt::Display for Repair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.items", self.schema, self.property)
    }
}

/// Fill in a missing `type` on untyped array items, in place.
///
/// Returns the repairs applied, in document order. Running it again on the
/// result returns an empty list. A missing or non-mapping registry,
/// `properties`, property or `items` value is skipped without error.
pub fn repair_array_items(doc: &mut JsonValue) -> Vec<Repair> {
    let mut repairs = Vec::new();

    let schemas = match doc
        .get_mut("components")
        .and_then(|c| c.get_mut("schemas"))
        .and_then(JsonValue::as_object_mut)
    {
        Some(s) => s,
        None => return repairs,
    };

    for (schema_name, schema_def) in schemas.iter_mut() {
        let properties = match schema_def
            .get_mut("properties")
            .and_then(JsonValue::as_object_mut)
        {
            Some(p) => p,
            None => continue,
        };

        for (prop_name, prop_def) in properties.iter_mut() {
            if let Some(items) = untyped_array_items(prop_def) {
                log::info!("Fixing missing type in {schema_name}.{prop_name}.items");
                items.insert(
                    "type".to_string(),
                    JsonValue::String(DEFAULT_ITEMS_TYPE.to_string()),
                );
                repairs.push(Repair {
                    schema: schema_name.clone(),
                    property: prop_name.clone(),
                });
            }
        }
    }

    repairs
}

/// The `items` mapping of an array property lacking both `type` and `$ref`
fn untyped_array_items(prop_def: &mut JsonValue) -> Option<&mut JsonMap<String, JsonValue>> {
    let prop = prop_def.as_object_mut()?;
    if prop.get("type").and_then(JsonValue::as_str) != Some("array") {
        return None;
    }
    let items = prop.get_mut("items")?.as_object_mut()?;
    if items.contains_key("type") || items.contains_key("$ref") {
        return None;
    }
    Some(items)
}
