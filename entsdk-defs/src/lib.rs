//! TOML entity definitions for the entsdk client SDK generator.
//!
//! An `entities.toml` file declares types, entity modules, and the server
//! error table. [`EntityDefs`] loads it into a
//! [`SchemaProvider`](entsdk_core::SchemaProvider) with every type resolved
//! and ordered so dependencies come first.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod decl;
mod defs;
mod error;
mod expr;
mod flags;
mod resolve;

pub use decl::SdkConfig;
pub use defs::{DEFAULT_FILENAME, EntityDefs};
pub use error::{Error, Result, SourceContext};
pub use expr::TypeExpr;
pub use flags::PropertyFlags;
