//! Schema data types.
//!
//! A [`DataType`] is either one of the closed set of [`Primitive`] kinds or a
//! composite (`ARRAY` / `FIXED_DICT`). Composites hold their nested types
//! behind `Arc` so a type declared once can be shared by every property,
//! argument, and member that references it.

use std::{fmt, sync::Arc};

/// Non-composite schema types.
///
/// This is a language-agnostic representation. Backends map each variant to
/// a target type name through their type mapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float,
    Double,
    String,
    Unicode,
    Blob,
    /// Arbitrary serialized script value.
    Python,
    PyDict,
    PyTuple,
    PyList,
    Vector2,
    Vector3,
    Vector4,
    /// Remote reference to another entity.
    EntityCall,
}

impl Primitive {
    /// Every primitive, in canonical registry order.
    pub const ALL: [Primitive; 21] = [
        Primitive::Int8,
        Primitive::Int16,
        Primitive::Int32,
        Primitive::Int64,
        Primitive::UInt8,
        Primitive::UInt16,
        Primitive::UInt32,
        Primitive::UInt64,
        Primitive::Float,
        Primitive::Double,
        Primitive::String,
        Primitive::Unicode,
        Primitive::Blob,
        Primitive::Python,
        Primitive::PyDict,
        Primitive::PyTuple,
        Primitive::PyList,
        Primitive::Vector2,
        Primitive::Vector3,
        Primitive::Vector4,
        Primitive::EntityCall,
    ];

    /// Get the schema keyword (canonical name) for this primitive.
    pub fn as_str(&self) -> &'static str {
        match self {
            Primitive::Int8 => "INT8",
            Primitive::Int16 => "INT16",
            Primitive::Int32 => "INT32",
            Primitive::Int64 => "INT64",
            Primitive::UInt8 => "UINT8",
            Primitive::UInt16 => "UINT16",
            Primitive::UInt32 => "UINT32",
            Primitive::UInt64 => "UINT64",
            Primitive::Float => "FLOAT",
            Primitive::Double => "DOUBLE",
            Primitive::String => "STRING",
            Primitive::Unicode => "UNICODE",
            Primitive::Blob => "BLOB",
            Primitive::Python => "PYTHON",
            Primitive::PyDict => "PY_DICT",
            Primitive::PyTuple => "PY_TUPLE",
            Primitive::PyList => "PY_LIST",
            Primitive::Vector2 => "VECTOR2",
            Primitive::Vector3 => "VECTOR3",
            Primitive::Vector4 => "VECTOR4",
            Primitive::EntityCall => "ENTITYCALL",
        }
    }

    /// Look up a primitive by schema keyword.
    ///
    /// `MAILBOX` is accepted as the legacy spelling of `ENTITYCALL`.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        if keyword == "MAILBOX" {
            return Some(Primitive::EntityCall);
        }
        Self::ALL.into_iter().find(|p| p.as_str() == keyword)
    }

    /// Whether this is an integer or floating point scalar.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Primitive::Int8
                | Primitive::Int16
                | Primitive::Int32
                | Primitive::Int64
                | Primitive::UInt8
                | Primitive::UInt16
                | Primitive::UInt32
                | Primitive::UInt64
                | Primitive::Float
                | Primitive::Double
        )
    }

    /// Whether this is one of the vector kinds.
    pub fn is_vector(&self) -> bool {
        matches!(
            self,
            Primitive::Vector2 | Primitive::Vector3 | Primitive::Vector4
        )
    }

    /// How values of this primitive are passed in generated argument lists.
    pub fn pass_by(&self) -> PassBy {
        if self.is_numeric() {
            PassBy::Value
        } else {
            PassBy::Reference
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Argument passing convention in the target language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassBy {
    Value,
    /// Passed by (const, where the target distinguishes it) reference.
    Reference,
}

/// Ordered member map of a `FIXED_DICT`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FixedDict {
    fields: Vec<(String, Arc<DataType>)>,
}

impl FixedDict {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a member. Declaration order is preserved.
    pub fn field(mut self, name: impl Into<String>, ty: impl Into<Arc<DataType>>) -> Self {
        self.push(name, ty);
        self
    }

    pub fn push(&mut self, name: impl Into<String>, ty: impl Into<Arc<DataType>>) {
        self.fields.push((name.into(), ty.into()));
    }

    /// Members in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Arc<DataType>)> {
        self.fields.iter().map(|(name, ty)| (name.as_str(), ty))
    }

    pub fn get(&self, name: &str) -> Option<&Arc<DataType>> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, ty)| ty)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// The shape of a [`DataType`].
#[derive(Debug, Clone, PartialEq)]
pub enum DataKind {
    Primitive(Primitive),
    /// `ARRAY` with exactly one element type.
    Array(Arc<DataType>),
    FixedDict(FixedDict),
}

/// A schema type together with its alias name.
///
/// A type is *declared* when it owns a registry name (its alias). Declared
/// composites are referenced by alias in generated code; inline arrays are
/// spelled out with the backend's array syntax.
#[derive(Debug, Clone, PartialEq)]
pub struct DataType {
    alias: String,
    kind: DataKind,
    declared: bool,
}

impl DataType {
    /// An undeclared primitive, aliased by its canonical name.
    pub fn primitive(primitive: Primitive) -> Self {
        Self {
            alias: primitive.as_str().to_string(),
            kind: DataKind::Primitive(primitive),
            declared: false,
        }
    }

    /// An inline array of `element`.
    pub fn array(element: impl Into<Arc<DataType>>) -> Self {
        Self {
            alias: "ARRAY".to_string(),
            kind: DataKind::Array(element.into()),
            declared: false,
        }
    }

    /// A declared fixed dict.
    pub fn fixed_dict(alias: impl Into<String>, dict: FixedDict) -> Self {
        Self {
            alias: alias.into(),
            kind: DataKind::FixedDict(dict),
            declared: true,
        }
    }

    /// Declare this type under `alias`.
    pub fn named(mut self, alias: impl Into<String>) -> Self {
        self.alias = alias.into();
        self.declared = true;
        self
    }

    /// Canonical kind name (`INT32`, `ARRAY`, `FIXED_DICT`, ...).
    pub fn name(&self) -> &'static str {
        match &self.kind {
            DataKind::Primitive(p) => p.as_str(),
            DataKind::Array(_) => "ARRAY",
            DataKind::FixedDict(_) => "FIXED_DICT",
        }
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    pub fn kind(&self) -> &DataKind {
        &self.kind
    }

    pub fn is_declared(&self) -> bool {
        self.declared
    }

    pub fn is_composite(&self) -> bool {
        !matches!(self.kind, DataKind::Primitive(_))
    }

    /// Schema-level spelling used in diagnostics, e.g. `ARRAY<INT32>`.
    pub fn describe(&self) -> String {
        if self.declared {
            return self.alias.clone();
        }
        match &self.kind {
            DataKind::Primitive(p) => p.as_str().to_string(),
            DataKind::Array(element) => format!("ARRAY<{}>", element.describe()),
            DataKind::FixedDict(_) => self.alias.clone(),
        }
    }
}

impl From<Primitive> for DataType {
    fn from(primitive: Primitive) -> Self {
        Self::primitive(primitive)
    }
}

impl From<Primitive> for Arc<DataType> {
    fn from(primitive: Primitive) -> Self {
        Arc::new(DataType::primitive(primitive))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_round_trip() {
        for p in Primitive::ALL {
            assert_eq!(Primitive::from_keyword(p.as_str()), Some(p));
        }
        assert_eq!(Primitive::from_keyword("MAILBOX"), Some(Primitive::EntityCall));
        assert_eq!(Primitive::from_keyword("int32"), None);
        assert_eq!(Primitive::from_keyword("ARRAY"), None);
    }

    #[test]
    fn test_pass_by() {
        assert_eq!(Primitive::UInt16.pass_by(), PassBy::Value);
        assert_eq!(Primitive::Double.pass_by(), PassBy::Value);
        assert_eq!(Primitive::String.pass_by(), PassBy::Reference);
        assert_eq!(Primitive::Blob.pass_by(), PassBy::Reference);
        assert_eq!(Primitive::Vector3.pass_by(), PassBy::Reference);
        assert_eq!(Primitive::EntityCall.pass_by(), PassBy::Reference);
    }

    #[test]
    fn test_fixed_dict_preserves_order() {
        let dict = FixedDict::new()
            .field("zeta", Primitive::Int8)
            .field("alpha", Primitive::String)
            .field("mid", Primitive::Float);

        let names: Vec<_> = dict.fields().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
        assert_eq!(dict.get("alpha").unwrap().name(), "STRING");
    }

    #[test]
    fn test_names_and_aliases() {
        let id = DataType::primitive(Primitive::Int32).named("ENTITY_ID");
        assert_eq!(id.name(), "INT32");
        assert_eq!(id.alias(), "ENTITY_ID");
        assert!(id.is_declared());
        assert!(!id.is_composite());

        let ids = DataType::array(id);
        assert_eq!(ids.name(), "ARRAY");
        assert!(!ids.is_declared());
        assert_eq!(ids.describe(), "ARRAY<ENTITY_ID>");
    }

    #[test]
    fn test_describe_nested_inline_arrays() {
        let grid = DataType::array(DataType::array(Primitive::UInt8));
        assert_eq!(grid.describe(), "ARRAY<ARRAY<UINT8>>");
        assert_eq!(grid.clone().named("GRID").describe(), "GRID");
    }
}
