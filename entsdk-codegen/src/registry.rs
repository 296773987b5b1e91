//! Backend lookup by identifier.

use indexmap::IndexMap;

use crate::{
    backend::Backend,
    config::GeneratorConfig,
    error::{CodegenError, Result},
};

/// Constructor for a backend.
pub type BackendFactory = fn(&GeneratorConfig) -> Box<dyn Backend>;

/// Maps canonical backend identifiers to their constructors.
///
/// Identifiers are stored lowercase and matched case-insensitively.
/// There is no default backend: an unknown identifier is an error.
#[derive(Default)]
pub struct BackendRegistry {
    factories: IndexMap<String, BackendFactory>,
}

impl BackendRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `factory` under `id`, replacing any earlier registration.
    pub fn register(&mut self, id: &str, factory: BackendFactory) -> &mut Self {
        self.factories.insert(id.to_lowercase(), factory);
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(&name.to_lowercase())
    }

    /// Construct the backend registered under `name`.
    pub fn create(&self, name: &str, config: &GeneratorConfig) -> Result<Box<dyn Backend>> {
        match self.factories.get(&name.to_lowercase()) {
            Some(factory) => Ok(factory(config)),
            None => Err(CodegenError::BackendNotFound {
                name: name.to_string(),
                available: self.names().map(str::to_string).collect(),
            }),
        }
    }

    /// Registered identifiers in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingBackend;

    fn recording(_config: &GeneratorConfig) -> Box<dyn Backend> {
        Box::new(RecordingBackend::default())
    }

    #[test]
    fn test_create_is_case_insensitive() {
        let mut registry = BackendRegistry::new();
        registry.register("Recording", recording);

        let config = GeneratorConfig::default();
        assert_eq!(registry.create("recording", &config).unwrap().name(), "recording");
        assert_eq!(registry.create("RECORDING", &config).unwrap().name(), "recording");
        assert!(registry.contains("ReCoRdInG"));
    }

    #[test]
    fn test_unknown_backend_is_not_found() {
        let mut registry = BackendRegistry::new();
        registry.register("unity", recording).register("ue4", recording);

        let err = registry
            .create("godot", &GeneratorConfig::default())
            .err()
            .unwrap();
        match err {
            CodegenError::BackendNotFound { name, available } => {
                assert_eq!(name, "godot");
                assert_eq!(available, vec!["unity".to_string(), "ue4".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_registry_has_no_default() {
        let registry = BackendRegistry::new();
        assert!(registry.create("", &GeneratorConfig::default()).is_err());
        assert_eq!(registry.names().count(), 0);
    }
}
