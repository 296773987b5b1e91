//! UE4 (C++) backend for the entsdk client SDK generator.
//!
//! Produces header-only output: `EntityTypes.h`, one `<Module>.h` per entity
//! module with a client part, and `ServerErrors.h` when the schema declares
//! errors.

mod backend;
mod type_mapper;

use entsdk_codegen::{Backend, GeneratorConfig};

pub use backend::Ue4Backend;
pub use type_mapper::Ue4TypeMapper;

/// Registry identifier of this backend.
pub const BACKEND_ID: &str = "ue4";

/// Backend constructor for [`BackendRegistry`](entsdk_codegen::BackendRegistry).
pub fn factory(config: &GeneratorConfig) -> Box<dyn Backend> {
    Box::new(Ue4Backend::new(config))
}
