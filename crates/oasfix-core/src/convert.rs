//! The load → repair → write → verify → report pipeline.
//!
//! Each phase finishes, with its file handle closed, before the next begins.
//! Any failure stops the run and is returned to the caller; nothing is retried.
//!
//! # Examples
//!
//! ```no_run
//! use oasfix_core::{convert_with, ConvertConfig, Progress};
//!
//! # fn main() -> oasfix_core::Result<()> {
//! let report = convert_with(&ConvertConfig::default(), |event: &Progress| {
//!     println!("{event}");
//! })?;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```

// Internal imports (std, crate)
use std::fmt;
use std::path::PathBuf;

use crate::config::ConvertConfig;
use crate::openapi::OpenApiDocument;
use crate::repair::{repair_array_items, Repair};
use crate::report::Report;
use crate::writer::{verify_written, JsonWriter, PrettyJsonWriter};

/// A phase milestone reached during a conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    /// Input YAML parsed
    Loaded { path: PathBuf },
    /// An untyped array `items` mapping was given a type
    Repaired(Repair),
    /// Repair pass finished over a schema registry of `count` entries
    SchemasChecked { count: usize },
    /// Output JSON written and closed
    Written { path: PathBuf },
    /// Output JSON re-read and matched the written document
    Verified { path: PathBuf },
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loaded { path } => {
                write!(f, "✅ YAML loaded successfully from {}", path.display())
            }
            Self::Repaired(repair) => write!(f, "⚠️  Fixing missing type in {repair}"),
            Self::SchemasChecked { count } => write!(f, "✅ Validated {count} schemas"),
            Self::Written { path } => {
                write!(f, "✅ JSON written successfully to {}", path.display())
            }
            Self::Verified { path } => {
                write!(f, "✅ JSON validation successful for {}", path.display())
            }
        }
    }
}

/// Runs conversions with a given JSON writer
pub struct Converter<W = PrettyJsonWriter> {
    config: ConvertConfig,
    writer: W,
}

impl Converter {
    pub fn new(config: ConvertConfig) -> Self {
        Self {
            config,
            writer: PrettyJsonWriter,
        }
    }
}

impl<W: JsonWriter> Converter<W> {
    /// Use a different writer for the serialize phase
    pub fn with_writer<V: JsonWriter>(self, writer: V) -> Converter<V> {
        Converter {
            config: self.config,
            writer,
        }
    }

    pub fn config(&self) -> &ConvertConfig {
        &self.config
    }

    /// Run every phase, reporting milestones to `observer`
    pub fn run<F>(&self, mut observer: F) -> crate::Result<Report>
    where
        F: FnMut(&Progress),
    {
        let input = &self.config.input_path;
        let output = &self.config.output_path;

        log::debug!("Reading OpenAPI YAML from {}", input.display());
        let mut doc = OpenApiDocument::from_yaml_file(input)?;
        observer(&Progress::Loaded {
            path: input.clone(),
        });

        let repairs = repair_array_items(doc.as_json_mut());
        for repair in &repairs {
            observer(&Progress::Repaired(repair.clone()));
        }
        if let Some(schemas) = doc.schemas() {
            observer(&Progress::SchemasChecked {
                count: schemas.len(),
            });
        }

        log::debug!("Writing JSON to {}", output.display());
        self.writer.write(doc.as_json(), output)?;
        observer(&Progress::Written {
            path: output.clone(),
        });

        let verified = verify_written(doc.as_json(), output)?;
        observer(&Progress::Verified {
            path: output.clone(),
        });

        let report = Report::from_document(&verified, &self.config.required_schemas, repairs);
        log::debug!(
            "Converted {} schemas with {} repairs",
            report.schema_count,
            report.repairs.len()
        );
        Ok(report)
    }
}

/// Convert `config.input_path` into `config.output_path`
pub fn convert(config: &ConvertConfig) -> crate::Result<Report> {
    convert_with(config, |_| {})
}

/// Like [`convert`], also reporting each milestone to `observer`
pub fn convert_with<F>(config: &ConvertConfig, observer: F) -> crate::Result<Report>
where
    F: FnMut(&Progress),
{
    Converter::new(config.clone()).run(observer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::fs;
    use tempfile::tempdir;

    const SAMPLE: &str = r#"openapi: 3.0.3
info:
  title: PowerDNS Admin API
  version: 1.0.0
components:
  schemas:
    Account:
      type: object
      properties:
        domains:
          type: array
          items: {}
    Domain:
      type: object
"#;

    #[test]
    fn test_progress_order() {
        let dir = tempdir().unwrap();
        let config = ConvertConfig::in_dir(dir.path());
        fs::write(&config.input_path, SAMPLE).unwrap();

        let mut events = Vec::new();
        let report = convert_with(&config, |e| events.push(e.clone())).unwrap();

        assert_eq!(
            events,
            vec![
                Progress::Loaded {
                    path: config.input_path.clone()
                },
                Progress::Repaired(Repair {
                    schema: "Account".into(),
                    property: "domains".into()
                }),
                Progress::SchemasChecked { count: 2 },
                Progress::Written {
                    path: config.output_path.clone()
                },
                Progress::Verified {
                    path: config.output_path.clone()
                },
            ]
        );
        assert_eq!(report.repairs.len(), 1);
        assert_eq!(report.schema_count, 2);
        assert_eq!(report.title, "PowerDNS Admin API");
    }

    #[test]
    fn test_no_registry_skips_schema_event() {
        let dir = tempdir().unwrap();
        let config = ConvertConfig::in_dir(dir.path());
        fs::write(&config.input_path, "openapi: 3.0.0\npaths: {}\n").unwrap();

        let mut events = Vec::new();
        convert_with(&config, |e| events.push(e.clone())).unwrap();
        assert!(!events
            .iter()
            .any(|e| matches!(e, Progress::SchemasChecked { .. })));
        assert_eq!(events.len(), 3);
    }

    #[test]
    fn test_parse_failure_writes_nothing() {
        let dir = tempdir().unwrap();
        let config = ConvertConfig::in_dir(dir.path());
        fs::write(&config.input_path, "openapi: [3.0\n").unwrap();

        let err = convert(&config).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert!(!config.output_path.exists());
    }

    #[test]
    fn test_missing_input_is_file_error() {
        let dir = tempdir().unwrap();
        let config = ConvertConfig::in_dir(dir.path());
        let err = convert(&config).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::File);
        assert_eq!(err.path(), config.input_path.as_path());
    }

    #[test]
    fn test_progress_display() {
        let event = Progress::Repaired(Repair {
            schema: "Account".into(),
            property: "domains".into(),
        });
        assert_eq!(
            event.to_string(),
            "⚠️  Fixing missing type in Account.domains.items"
        );
        assert_eq!(
            Progress::SchemasChecked { count: 7 }.to_string(),
            "✅ Validated 7 schemas"
        );
    }
}
