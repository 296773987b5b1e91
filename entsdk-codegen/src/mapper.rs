//! Backend type mapping.

use entsdk_core::{PassBy, Primitive};

/// A schema type resolved to a target-language type name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedType {
    pub name: String,
    pub pass_by: PassBy,
}

impl ResolvedType {
    pub fn by_value(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pass_by: PassBy::Value,
        }
    }

    pub fn by_reference(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pass_by: PassBy::Reference,
        }
    }
}

/// What a backend does with a type it has no mapping for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnresolvedPolicy {
    /// Substitute this generic type name and log a warning.
    Fallback(&'static str),
    /// Abort the run with `UnsupportedType`.
    Fail,
}

/// Trait for mapping schema types to target-language type names.
///
/// Declared composites are always referenced by their alias; a mapper only
/// decides primitives, inline array syntax, and argument qualification.
pub trait TypeMapper {
    /// Target name for a primitive, or `None` when the backend cannot
    /// represent it.
    fn map_primitive(&self, primitive: Primitive) -> Option<&'static str>;

    /// Inline array syntax around an already-resolved element name.
    fn map_inline_array(&self, element: &str) -> String;

    /// Parameter type for a resolved argument (e.g. `const T&` in C++).
    fn qualify(&self, ty: &ResolvedType) -> String {
        ty.name.clone()
    }

    fn unresolved_policy(&self) -> UnresolvedPolicy;
}
