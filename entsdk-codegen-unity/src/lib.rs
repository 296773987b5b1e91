//! Unity (C#) backend for the entsdk client SDK generator.
//!
//! Produces `EntityTypes.cs`, one `<Module>.cs` per entity module with a
//! client part, and `ServerErrors.cs` when the schema declares errors.

mod backend;
mod type_mapper;

use entsdk_codegen::{Backend, GeneratorConfig};

pub use backend::UnityBackend;
pub use type_mapper::UnityTypeMapper;

/// Registry identifier of this backend.
pub const BACKEND_ID: &str = "unity";

/// Backend constructor for [`BackendRegistry`](entsdk_codegen::BackendRegistry).
pub fn factory(config: &GeneratorConfig) -> Box<dyn Backend> {
    Box::new(UnityBackend::new(config))
}
