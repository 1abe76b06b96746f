//! JSON serialization of the document and the round-trip check on the result.

// Internal imports (std, crate)
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{Error, VerifyFailure};
use crate::openapi::OpenApiDocument;

// External imports (alphabetized)
use serde_json::Value as JsonValue;

/// Trait for writing a document tree to a file as JSON.
pub trait JsonWriter {
    fn write(&self, value: &JsonValue, path: &Path) -> crate::Result<()>;
}

/// Writes two-space indented JSON with keys in insertion order and
/// non-ASCII text left unescaped. Existing content is replaced.
#[derive(Debug, Default, Clone, Copy)]
pub struct PrettyJsonWriter;

impl JsonWriter for PrettyJsonWriter {
    fn write(&self, value: &JsonValue, path: &Path) -> crate::Result<()> {
        let file = File::create(path).map_err(|e| Error::file(path, e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, value)
            .map_err(|e| Error::file(path, e.into()))?;
        writer.flush().map_err(|e| Error::file(path, e))?;
        Ok(())
    }
}

/// Re-read `path` and check it holds exactly `expected`.
///
/// Returns the re-read document so callers report on what is on disk.
pub fn verify_written(expected: &JsonValue, path: &Path) -> crate::Result<OpenApiDocument> {
    let written = OpenApiDocument::from_json_file(path)?;
    if written.as_json() != expected {
        return Err(Error::verify(path, VerifyFailure::Diverged));
    }
    Ok(written)
}
