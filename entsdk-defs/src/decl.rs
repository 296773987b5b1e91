//! Raw deserialized form of an entity definitions file.

use entsdk_core::VectorEncoding;
use indexmap::IndexMap;
use serde::Deserialize;

use crate::flags::PropertyFlags;

/// Root of `entities.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct DefsFile {
    #[serde(default)]
    pub sdk: SdkConfig,
    #[serde(default)]
    pub types: IndexMap<String, TypeDecl>,
    #[serde(default)]
    pub entities: IndexMap<String, EntityDecl>,
    #[serde(default)]
    pub errors: IndexMap<String, ErrorDecl>,
}

/// Generation defaults from the `[sdk]` section.
///
/// Command line flags take precedence over every field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SdkConfig {
    pub backend: Option<String>,
    pub vector_encoding: Option<VectorEncoding>,
    pub namespace: Option<String>,
}

/// A `[types]` entry: an expression string or an inline `FIXED_DICT` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum TypeDecl {
    Expr(String),
    Dict(IndexMap<String, TypeDecl>),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct EntityDecl {
    #[serde(default = "default_true")]
    pub has_client: bool,
    #[serde(default)]
    pub properties: IndexMap<String, PropertyDecl>,
    #[serde(default)]
    pub client_methods: IndexMap<String, Vec<String>>,
    #[serde(default)]
    pub base_methods: IndexMap<String, Vec<String>>,
    #[serde(default)]
    pub cell_methods: IndexMap<String, Vec<String>>,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct PropertyDecl {
    #[serde(rename = "type")]
    pub ty: String,
    pub flags: PropertyFlags,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ErrorDecl {
    pub id: u16,
    #[serde(default)]
    pub descr: String,
}
