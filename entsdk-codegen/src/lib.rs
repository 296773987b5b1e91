//! Schema traversal and emission engine for the entsdk client SDK generator.
//!
//! This crate walks a [`SchemaProvider`](entsdk_core::SchemaProvider) in a
//! stable order and hands each type and entity module to a [`Backend`],
//! which supplies the target-language text. Backend crates (e.g.
//! `entsdk-codegen-unity`) implement [`Backend`] and [`TypeMapper`].
//!
//! # Module Organization
//!
//! - [`builder`] - Indented text building ([`CodeBuilder`](builder::CodeBuilder), [`Indent`](builder::Indent))
//! - [`Generator`] - Run driver and per-kind dispatch
//! - [`Emitter`] - Per-file buffers with placeholder substitution
//! - [`BackendRegistry`] - Backend lookup by identifier
//! - [`testing`] - Test utilities (feature-gated)

mod backend;
pub mod builder;
mod config;
mod emitter;
mod error;
mod generator;
mod mapper;
mod registry;
mod resolve;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use backend::{ArgumentList, Backend, Field, FieldKind};
pub use config::{DEFAULT_NAMESPACE, GeneratorConfig};
pub use emitter::{Emitter, Placeholder, PreviewFile};
pub use error::{CodegenError, Result};
pub use generator::{GenerateResult, Generator, RESERVED_MARKER};
pub use mapper::{ResolvedType, TypeMapper, UnresolvedPolicy};
pub use registry::{BackendFactory, BackendRegistry};
pub use resolve::Resolver;
