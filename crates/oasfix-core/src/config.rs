//! Configuration for an oasfix conversion run.
//!
//! The tool reads no configuration files, flags or environment variables: the
//! input and output names are fixed. `ConvertConfig` exists so the fixed values
//! live in one place and so tests can point a run at a temporary directory.
//!
//! # Examples
//!
//! ```
//! use oasfix_core::config::ConvertConfig;
//!
//! let config = ConvertConfig::default();
//! assert_eq!(config.input_path.to_str(), Some("openapi.yaml"));
//! assert_eq!(config.output_path.to_str(), Some("openapi.json"));
//!
//! let scoped = ConvertConfig::in_dir("/tmp/run");
//! assert!(scoped.input_path.ends_with("openapi.yaml"));
//! ```

// Internal imports (std, crate)
use std::path::{Path, PathBuf};

/// Input file name read by a default run
pub const DEFAULT_INPUT: &str = "openapi.yaml";

/// Output file name written by a default run
pub const DEFAULT_OUTPUT: &str = "openapi.json";

/// Schema names whose presence is reported after a run
pub const REQUIRED_SCHEMAS: [&str; 4] = ["Account", "AccountCreate", "AccountUpdate", "Domain"];

/// Settings for a single conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    /// Path to the OpenAPI YAML document
    pub input_path: PathBuf,

    /// Path the JSON document is written to
    pub output_path: PathBuf,

    /// Names checked for presence in `components.schemas`
    pub required_schemas: Vec<String>,
}

impl ConvertConfig {
    /// Create a config for explicit paths with the default checklist
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            required_schemas: default_required_schemas(),
        }
    }

    /// Resolve the fixed file names against `dir`
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self::new(dir.join(DEFAULT_INPUT), dir.join(DEFAULT_OUTPUT))
    }
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT, DEFAULT_OUTPUT)
    }
}

fn default_required_schemas() -> Vec<String> {
    REQUIRED_SCHEMAS.iter().map(|s| s.to_string()).collect()
}
