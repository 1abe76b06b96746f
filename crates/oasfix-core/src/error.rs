//! Error handling for the oasfix conversion library.
//!
//! This module defines the main error type `Error` used throughout the library,
//! along with a convenient `Result` type alias. Every variant carries the path
//! of the file that was being read or written when the failure happened.
//!
//! # Examples
//!
//! ```
//! use oasfix_core::error::{Error, ErrorKind, Result};
//!
//! fn might_fail() -> Result<()> {
//!     Err(Error::file("openapi.yaml", std::io::ErrorKind::NotFound.into()))
//! }
//!
//! assert_eq!(might_fail().unwrap_err().kind(), ErrorKind::File);
//! ```

// Internal imports (std, crate)
use std::path::{Path, PathBuf};

// External imports (alphabetized)
use thiserror::Error;

/// Result type for oasfix conversion operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for oasfix conversion operations
#[derive(Debug, Error)]
pub enum Error {
    /// Input missing or unreadable, or output not writable
    #[error("file error on {}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input is not well-formed YAML
    #[error("YAML parsing error in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseFailure,
    },

    /// Freshly written output did not survive the round-trip check
    #[error("verification of {} failed: {source}", path.display())]
    Verify {
        path: PathBuf,
        #[source]
        source: VerifyFailure,
    },
}

/// Reason an input document could not be read as YAML
#[derive(Debug, Error)]
pub enum ParseFailure {
    /// Not well-formed YAML
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    /// A `<<` merge key whose value is not a mapping or a list of mappings
    #[error("invalid merge key: {0}")]
    Merge(String),
}

/// Reason a written JSON file failed verification
#[derive(Debug, Error)]
pub enum VerifyFailure {
    /// The file could not be parsed back as JSON
    #[error("output is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The file parsed, but not to the document that was written
    #[error("output does not match the document that was written")]
    Diverged,
}

/// Coarse classification of an [`Error`], one per failure mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    File,
    Parse,
    Verify,
}

impl Error {
    /// Create a new file error
    pub fn file<P: AsRef<Path>>(path: P, source: std::io::Error) -> Self {
        Self::File {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a new YAML parse error
    pub fn parse<P: AsRef<Path>>(path: P, source: impl Into<ParseFailure>) -> Self {
        Self::Parse {
            path: path.as_ref().to_path_buf(),
            source: source.into(),
        }
    }

    /// Create a parse error for an unusable merge key
    pub fn merge<P: AsRef<Path>>(path: P, msg: impl Into<String>) -> Self {
        Self::parse(path, ParseFailure::Merge(msg.into()))
    }

    /// Create a new verification error
    pub fn verify<P: AsRef<Path>>(path: P, source: VerifyFailure) -> Self {
        Self::Verify {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::File { .. } => ErrorKind::File,
            Self::Parse { .. } => ErrorKind::Parse,
            Self::Verify { .. } => ErrorKind::Verify,
        }
    }

    /// Path of the file involved in the failure
    pub fn path(&self) -> &Path {
        match self {
            Self::File { path, .. } | Self::Parse { path, .. } | Self::Verify { path, .. } => path,
        }
    }
}
