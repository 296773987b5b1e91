//! Generate operation - client SDK files from entity definitions.

use std::path::Path;

use entsdk_codegen::{BackendRegistry, Generator, GeneratorConfig};
use entsdk_core::VectorEncoding;
use entsdk_defs::EntityDefs;
use eyre::{Context, Result, eyre};

use crate::reports::{GenerateReport, GenerationResult};

/// Options for the generate operation.
///
/// Every `Some` value overrides the matching `[sdk]` setting.
pub struct GenerateOptions<'a> {
    /// Output directory for generated files.
    pub output_dir: &'a Path,
    pub backend: Option<&'a str>,
    pub vector_encoding: Option<VectorEncoding>,
    pub namespace: Option<&'a str>,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
pub fn generate(
    defs: &EntityDefs,
    registry: &BackendRegistry,
    opts: GenerateOptions,
) -> Result<GenerateReport> {
    let sdk = defs.sdk();

    let backend_name = opts
        .backend
        .or(sdk.backend.as_deref())
        .ok_or_else(|| {
            let available: Vec<_> = registry.names().collect();
            eyre!(
                "no backend selected; pass --backend or set [sdk].backend (available: {})",
                available.join(", ")
            )
        })?;

    let mut config = GeneratorConfig::default();
    if let Some(encoding) = opts.vector_encoding.or(sdk.vector_encoding) {
        config = config.with_vector_encoding(encoding);
    }
    if let Some(namespace) = opts.namespace.or(sdk.namespace.as_deref()) {
        config = config.with_namespace(namespace);
    }

    let backend = registry.create(backend_name, &config)?;
    tracing::info!(
        "using {} backend ({} vectors, namespace {})",
        backend.name(),
        config.vector_encoding,
        config.namespace
    );
    let generator = Generator::new(defs, backend);

    let result = if opts.dry_run {
        let files = generator.preview().wrap_err("Failed to render code")?;
        GenerationResult::Preview(files)
    } else {
        let written = generator
            .run(opts.output_dir)
            .wrap_err("Failed to generate code")?;
        GenerationResult::Written {
            output_dir: opts.output_dir.to_path_buf(),
            files: written.written,
        }
    };

    Ok(GenerateReport {
        backend: generator.backend().name().to_string(),
        config,
        result,
    })
}
