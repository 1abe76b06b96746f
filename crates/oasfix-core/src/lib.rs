//! oasfix Core Library
//!
//! This library loads an OpenAPI document from YAML, gives untyped array
//! items a default type, writes the document as JSON and verifies the
//! written file before reporting on it.

pub mod config;
pub mod convert;
pub mod error;
pub mod openapi;
pub mod repair;
pub mod report;
pub mod writer;

pub use crate::{
    config::ConvertConfig,
    convert::{convert, convert_with, Converter, Progress},
    error::{Error, ErrorKind, ParseFailure, Result, VerifyFailure},
    openapi::OpenApiDocument,
    repair::{repair_array_items, Repair},
    report::{Report, SchemaCheck},
    writer::{verify_written, JsonWriter, PrettyJsonWriter},
};
