//! Core model and utilities for the entsdk client SDK generator.
//!
//! This crate provides the schema model shared by every other crate in the
//! workspace: data types, entity modules, the [`SchemaProvider`] seam, and
//! small file and string helpers.

mod encoding;
mod file;
mod schema;
mod types;
mod utils;

pub use encoding::VectorEncoding;
// File operations
pub use file::{WriteError, WriteStage, normalize_path, write_file_atomic};
pub use schema::{
    EntityModule, MethodDescription, PropertyDescription, Schema, SchemaProvider, ServerError,
};
// Fundamental types
pub use types::{DataKind, DataType, FixedDict, PassBy, Primitive};
// String utilities
pub use utils::{escape_string_literal, to_pascal_case};
