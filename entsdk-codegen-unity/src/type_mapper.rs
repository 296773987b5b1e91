//! C# type mapper implementation.

use entsdk_codegen::{TypeMapper, UnresolvedPolicy};
use entsdk_core::{Primitive, VectorEncoding};

/// C# type mapper implementation.
///
/// C# passes class instances by reference already, so argument types are
/// left unqualified.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnityTypeMapper {
    vectors: VectorEncoding,
}

impl UnityTypeMapper {
    pub fn new(vectors: VectorEncoding) -> Self {
        Self { vectors }
    }
}

impl TypeMapper for UnityTypeMapper {
    fn map_primitive(&self, primitive: Primitive) -> Option<&'static str> {
        let name = match primitive {
            Primitive::Int8 => "SByte",
            Primitive::Int16 => "Int16",
            Primitive::Int32 => "Int32",
            Primitive::Int64 => "Int64",
            Primitive::UInt8 => "Byte",
            Primitive::UInt16 => "UInt16",
            Primitive::UInt32 => "UInt32",
            Primitive::UInt64 => "UInt64",
            Primitive::Float => "float",
            Primitive::Double => "double",
            Primitive::String | Primitive::Unicode => "string",
            Primitive::Blob
            | Primitive::Python
            | Primitive::PyDict
            | Primitive::PyTuple
            | Primitive::PyList => "byte[]",
            Primitive::Vector2 => match self.vectors {
                VectorEncoding::Floating => "Vector2",
                VectorEncoding::FixedPoint => "Vector2Int",
            },
            Primitive::Vector3 => match self.vectors {
                VectorEncoding::Floating => "Vector3",
                VectorEncoding::FixedPoint => "Vector3Int",
            },
            Primitive::Vector4 => match self.vectors {
                VectorEncoding::Floating => "Vector4",
                VectorEncoding::FixedPoint => return None,
            },
            Primitive::EntityCall => "EntityCall",
        };
        Some(name)
    }

    fn map_inline_array(&self, element: &str) -> String {
        format!("List<{}>", element)
    }

    fn unresolved_policy(&self) -> UnresolvedPolicy {
        UnresolvedPolicy::Fallback("object")
    }
}

#[cfg(test)]
mod tests {
    use entsdk_codegen::ResolvedType;

    use super::*;

    #[test]
    fn test_integer_types() {
        let mapper = UnityTypeMapper::default();

        assert_eq!(mapper.map_primitive(Primitive::Int8), Some("SByte"));
        assert_eq!(mapper.map_primitive(Primitive::UInt8), Some("Byte"));
        assert_eq!(mapper.map_primitive(Primitive::UInt16), Some("UInt16"));
        assert_eq!(mapper.map_primitive(Primitive::Int64), Some("Int64"));
    }

    #[test]
    fn test_strings_and_blobs() {
        let mapper = UnityTypeMapper::default();

        assert_eq!(mapper.map_primitive(Primitive::String), Some("string"));
        assert_eq!(mapper.map_primitive(Primitive::Unicode), Some("string"));
        assert_eq!(mapper.map_primitive(Primitive::Blob), Some("byte[]"));
        assert_eq!(mapper.map_primitive(Primitive::PyDict), Some("byte[]"));
    }

    #[test]
    fn test_vector_encoding() {
        let floating = UnityTypeMapper::new(VectorEncoding::Floating);
        let fixed = UnityTypeMapper::new(VectorEncoding::FixedPoint);

        assert_eq!(floating.map_primitive(Primitive::Vector3), Some("Vector3"));
        assert_eq!(floating.map_primitive(Primitive::Vector4), Some("Vector4"));
        assert_eq!(fixed.map_primitive(Primitive::Vector2), Some("Vector2Int"));
        assert_eq!(fixed.map_primitive(Primitive::Vector3), Some("Vector3Int"));
        assert_eq!(fixed.map_primitive(Primitive::Vector4), None);
    }

    #[test]
    fn test_arrays_and_qualification() {
        let mapper = UnityTypeMapper::default();

        assert_eq!(mapper.map_inline_array("Int32"), "List<Int32>");
        assert_eq!(mapper.qualify(&ResolvedType::by_reference("string")), "string");
        assert_eq!(
            mapper.unresolved_policy(),
            UnresolvedPolicy::Fallback("object")
        );
    }
}
