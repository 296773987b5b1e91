//! Generator configuration.

use entsdk_core::VectorEncoding;

/// Namespace used when none is configured.
pub const DEFAULT_NAMESPACE: &str = "EntitySdk";

/// Settings handed to a backend at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// How vector primitives are represented.
    pub vector_encoding: VectorEncoding,
    /// Namespace wrapping generated declarations, where the target has one.
    pub namespace: String,
}

impl GeneratorConfig {
    pub fn with_vector_encoding(mut self, encoding: VectorEncoding) -> Self {
        self.vector_encoding = encoding;
        self
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            vector_encoding: VectorEncoding::default(),
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }
}
