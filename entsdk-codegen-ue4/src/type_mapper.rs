//! Unreal C++ type mapper implementation.

use entsdk_codegen::{ResolvedType, TypeMapper, UnresolvedPolicy};
use entsdk_core::{PassBy, Primitive, VectorEncoding};

/// Unreal C++ type mapper implementation.
///
/// Reference arguments are passed as `const T&`. There is no generic
/// fallback type, so anything unmapped aborts generation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ue4TypeMapper {
    vectors: VectorEncoding,
}

impl Ue4TypeMapper {
    pub fn new(vectors: VectorEncoding) -> Self {
        Self { vectors }
    }
}

impl TypeMapper for Ue4TypeMapper {
    fn map_primitive(&self, primitive: Primitive) -> Option<&'static str> {
        let fixed = self.vectors == VectorEncoding::FixedPoint;
        let name = match primitive {
            Primitive::Int8 => "int8",
            Primitive::Int16 => "int16",
            Primitive::Int32 => "int32",
            Primitive::Int64 => "int64",
            Primitive::UInt8 => "uint8",
            Primitive::UInt16 => "uint16",
            Primitive::UInt32 => "uint32",
            Primitive::UInt64 => "uint64",
            Primitive::Float => "float",
            Primitive::Double => "double",
            Primitive::String | Primitive::Unicode => "FString",
            Primitive::Blob
            | Primitive::Python
            | Primitive::PyDict
            | Primitive::PyTuple
            | Primitive::PyList => "TArray<uint8>",
            Primitive::Vector2 if fixed => "FIntPoint",
            Primitive::Vector2 => "FVector2D",
            Primitive::Vector3 if fixed => "FIntVector",
            Primitive::Vector3 => "FVector",
            Primitive::Vector4 if fixed => return None,
            Primitive::Vector4 => "FVector4",
            Primitive::EntityCall => "FEntityCall",
        };
        Some(name)
    }

    fn map_inline_array(&self, element: &str) -> String {
        format!("TArray<{}>", element)
    }

    fn qualify(&self, ty: &ResolvedType) -> String {
        match ty.pass_by {
            PassBy::Value => ty.name.clone(),
            PassBy::Reference => format!("const {}&", ty.name),
        }
    }

    fn unresolved_policy(&self) -> UnresolvedPolicy {
        UnresolvedPolicy::Fail
    }
}
