//! Backend registration.
//!
//! Every backend the binary ships is registered here once, at startup.

use entsdk_codegen::BackendRegistry;

/// Registry holding every built-in backend.
pub fn registry() -> BackendRegistry {
    let mut registry = BackendRegistry::new();
    registry
        .register(entsdk_codegen_unity::BACKEND_ID, entsdk_codegen_unity::factory)
        .register(entsdk_codegen_ue4::BACKEND_ID, entsdk_codegen_ue4::factory);
    registry
}

#[cfg(test)]
mod tests {
    use entsdk_codegen::{CodegenError, GeneratorConfig};

    use super::*;

    #[test]
    fn test_builtin_backends() {
        let registry = registry();
        let names: Vec<_> = registry.names().collect();
        assert_eq!(names, vec!["unity", "ue4"]);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let registry = registry();
        let config = GeneratorConfig::default();

        assert_eq!(registry.create("Unity", &config).unwrap().name(), "unity");
        assert_eq!(registry.create("UE4", &config).unwrap().name(), "ue4");
    }

    #[test]
    fn test_unknown_backend() {
        let err = registry()
            .create("godot", &GeneratorConfig::default())
            .err()
            .unwrap();
        match err {
            CodegenError::BackendNotFound { name, available } => {
                assert_eq!(name, "godot");
                assert_eq!(available, vec!["unity", "ue4"]);
            }
            other => panic!("expected BackendNotFound, got {other}"),
        }
    }
}
