//! OpenAPI document loading and accessors.
//!
//! The document is kept as an untyped tree so that every section, including
//! ones this crate knows nothing about, passes through unchanged. Mappings keep
//! their insertion order (`serde_json` is built with `preserve_order`).
//!
//! # Examples
//!
//! ```
//! use oasfix_core::openapi::OpenApiDocument;
//! use oasfix_core::error::Result;
//!
//! # fn main() -> Result<()> {
//! let doc = OpenApiDocument::from_yaml_str(
//!     "openapi.yaml",
//!     "openapi: 3.0.3\ninfo:\n  title: PowerDNS Admin\n",
//! )?;
//! assert_eq!(doc.openapi_version(), Some("3.0.3".to_string()));
//! assert_eq!(doc.title(), Some("PowerDNS Admin".to_string()));
//! # Ok(())
//! # }
//! ```

// Internal imports (std, crate)
use std::fs;
use std::path::Path;

use crate::error::{Error, VerifyFailure};

// External imports (alphabetized)
use serde_json::{Map as JsonMap, Value as JsonValue};

/// An OpenAPI document held as a JSON value tree
#[derive(Debug, Clone, PartialEq)]
pub struct OpenApiDocument {
    /// The raw value of the document
    pub json: JsonValue,
}

impl OpenApiDocument {
    pub fn new(json: JsonValue) -> Self {
        Self { json }
    }

    /// Parse YAML text; `origin` is only used to label errors.
    ///
    /// Aliases are expanded and `<<` merge keys are folded into their
    /// mapping, so the tree holds no YAML-only constructs.
    pub fn from_yaml_str<P: AsRef<Path>>(origin: P, content: &str) -> crate::Result<Self> {
        let origin = origin.as_ref();
        let mut json = serde_yaml::from_str(content).map_err(|e| Error::parse(origin, e))?;
        apply_merge_keys(&mut json).map_err(|msg| Error::merge(origin, msg))?;
        Ok(Self { json })
    }

    /// Read and parse a YAML file
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Error::file(path, e))?;
        Self::from_yaml_str(path, &content)
    }

    /// Read and parse a JSON file that this crate wrote.
    ///
    /// A parse failure here, invalid UTF-8 included, means the writer produced
    /// a broken file and is reported as a verification error.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let content = fs::read(path).map_err(|e| Error::file(path, e))?;
        let json = serde_json::from_slice(&content)
            .map_err(|e| Error::verify(path, VerifyFailure::Malformed(e)))?;
        Ok(Self { json })
    }

    /// Get a reference to the raw JSON value
    pub fn as_json(&self) -> &JsonValue {
        &self.json
    }

    pub fn as_json_mut(&mut self) -> &mut JsonValue {
        &mut self.json
    }

    /// Get the declared `openapi` version
    pub fn openapi_version(&self) -> Option<String> {
        self.json.get("openapi").map(scalar_text)
    }

    /// Get the title of the API
    pub fn title(&self) -> Option<String> {
        self.json.get("info")?.get("title").map(scalar_text)
    }

    /// Get the schema registry at `components.schemas`, if it is a mapping
    pub fn schemas(&self) -> Option<&JsonMap<String, JsonValue>> {
        self.json
            .get("components")?
            .get("schemas")
            .and_then(JsonValue::as_object)
    }
}

/// YAML merge key
const MERGE_KEY: &str = "<<";

/// Resolve `<<` merge keys bottom-up.
///
/// Merged entries come first, in the order the last merge source lists them;
/// earlier sources override later ones and the mapping's own keys override
/// all sources, each keeping the position where the key first appeared.
fn apply_merge_keys(value: &mut JsonValue) -> Result<(), String> {
    match value {
        JsonValue::Array(items) => items.iter_mut().try_for_each(apply_merge_keys),
        JsonValue::Object(map) => {
            for child in map.values_mut() {
                apply_merge_keys(child)?;
            }
            if !map.contains_key(MERGE_KEY) {
                return Ok(());
            }

            let mut sources = Vec::new();
            let mut own = Vec::with_capacity(map.len());
            for (key, child) in std::mem::take(map) {
                if key == MERGE_KEY {
                    sources = merge_sources(child)?;
                } else {
                    own.push((key, child));
                }
            }

            let mut merged = JsonMap::new();
            for source in sources.into_iter().rev() {
                merged.extend(source);
            }
            merged.extend(own);
            *map = merged;
            Ok(())
        }
        _ => Ok(()),
    }
}

fn merge_sources(value: JsonValue) -> Result<Vec<JsonMap<String, JsonValue>>, String> {
    match value {
        JsonValue::Object(map) => Ok(vec![map]),
        JsonValue::Array(items) => items
            .into_iter()
            .map(|item| match item {
                JsonValue::Object(map) => Ok(map),
                other => Err(format!("expected a mapping in merge list, found {other}")),
            })
            .collect(),
        other => Err(format!(
            "expected a mapping or a list of mappings, found {other}"
        )),
    }
}

/// Strings are returned bare; any other value as its JSON text.
fn scalar_text(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}
