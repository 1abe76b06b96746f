//! Summary of a finished conversion.

use std::fmt;

use crate::openapi::OpenApiDocument;
use crate::repair::Repair;

/// Placeholder for fields the document does not declare
pub const UNKNOWN: &str = "unknown";

/// Presence of one checklist schema in the registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaCheck {
    pub name: String,
    pub present: bool,
}

/// What a successful conversion produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Declared `openapi` version, or `unknown`
    pub openapi_version: String,
    /// `info.title`, or `unknown`
    pub title: String,
    /// Whether `components.schemas` is a mapping
    pub registry_present: bool,
    /// Number of entries in `components.schemas`
    pub schema_count: usize,
    /// One entry per checklist name, in checklist order
    pub checklist: Vec<SchemaCheck>,
    /// Repairs applied before writing
    pub repairs: Vec<Repair>,
}

impl Report {
    /// Build a report from the verified document
    pub fn from_document<S: AsRef<str>>(
        doc: &OpenApiDocument,
        required_schemas: &[S],
        repairs: Vec<Repair>,
    ) -> Self {
        let schemas = doc.schemas();
        let checklist = required_schemas
            .iter()
            .map(|name| SchemaCheck {
                name: name.as_ref().to_string(),
                present: schemas.is_some_and(|s| s.contains_key(name.as_ref())),
            })
            .collect();

        Self {
            openapi_version: doc
                .openapi_version()
                .unwrap_or_else(|| UNKNOWN.to_string()),
            title: doc.title().unwrap_or_else(|| UNKNOWN.to_string()),
            registry_present: schemas.is_some(),
            schema_count: schemas.map_or(0, |s| s.len()),
            checklist,
            repairs,
        }
    }

    /// Whether every checklist schema is present
    pub fn is_complete(&self) -> bool {
        self.checklist.iter().all(|c| c.present)
    }

    pub fn missing_schemas(&self) -> impl Iterator<Item = &str> {
        self.checklist
            .iter()
            .filter(|c| !c.present)
            .map(|c| c.name.as_str())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "✅ OpenAPI version: {}", self.openapi_version)?;
        write!(f, "✅ API title: {}", self.title)?;
        if !self.registry_present {
            return Ok(());
        }
        write!(f, "\n✅ Found {} schemas", self.schema_count)?;
        for check in &self.checklist {
            if check.present {
                write!(f, "\n✅ Schema '{}' is present", check.name)?;
            } else {
                write!(f, "\n❌ Schema '{}' is missing", check.name)?;
            }
        }
        Ok(())
    }
}
