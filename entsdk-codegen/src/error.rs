//! Error types for code generation.

use std::{io, path::PathBuf};

use entsdk_core::{WriteError, WriteStage};
use thiserror::Error;

/// Result alias for code generation operations.
pub type Result<T, E = CodegenError> = std::result::Result<T, E>;

/// Error type for code generation operations.
///
/// Every variant aborts the run that produced it.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// The schema provider has no data types registered.
    #[error("schema unavailable: no data types are registered")]
    SchemaUnavailable,

    /// A type the backend cannot map, under a `Fail` unresolved policy.
    #[error("{backend} backend cannot map type '{type_name}' (at {site})")]
    UnsupportedType {
        backend: &'static str,
        type_name: String,
        site: String,
    },

    /// A placeholder was not substituted exactly once.
    #[error("placeholder '{token}' in {file}: {detail}")]
    PlaceholderMismatch {
        file: String,
        token: String,
        detail: String,
    },

    /// Writing an output file failed.
    #[error("failed to {stage} '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        stage: WriteStage,
        #[source]
        source: io::Error,
    },

    /// Two generated files share an output name, so one would overwrite the other.
    #[error("generated file '{file}' would be written twice; rename the entity module")]
    DuplicateOutput { file: String },

    /// No backend is registered under the requested identifier.
    #[error("unknown backend '{name}' (available: {})", .available.join(", "))]
    BackendNotFound {
        name: String,
        available: Vec<String>,
    },
}

impl CodegenError {
    /// Attach the target path to a failed atomic write.
    pub fn write(path: impl Into<PathBuf>, err: WriteError) -> Self {
        Self::Io {
            path: path.into(),
            stage: err.stage,
            source: err.source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = CodegenError::UnsupportedType {
            backend: "ue4",
            type_name: "VECTOR4".to_string(),
            site: "Avatar.dir".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "ue4 backend cannot map type 'VECTOR4' (at Avatar.dir)"
        );

        let err = CodegenError::BackendNotFound {
            name: "godot".to_string(),
            available: vec!["unity".to_string(), "ue4".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "unknown backend 'godot' (available: unity, ue4)"
        );
    }

    #[test]
    fn test_write_error_keeps_stage() {
        let err = CodegenError::write(
            "out/Avatar.h",
            WriteError {
                stage: WriteStage::Rename,
                source: io::Error::other("busy"),
            },
        );
        assert!(matches!(
            err,
            CodegenError::Io {
                stage: WriteStage::Rename,
                ..
            }
        ));
        assert_eq!(err.to_string(), "failed to rename 'out/Avatar.h': busy");
    }
}
