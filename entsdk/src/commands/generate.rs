use std::path::PathBuf;

use clap::Args;
use entsdk_core::VectorEncoding;
use entsdk_defs::{DEFAULT_FILENAME, EntityDefs};
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    backends,
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the entity definitions
    #[arg(short, long, default_value = DEFAULT_FILENAME)]
    pub defs: PathBuf,

    /// Output directory (created if missing)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Target backend (overrides [sdk].backend)
    #[arg(short, long)]
    pub backend: Option<String>,

    /// Vector representation: floating or fixed-point (overrides [sdk].vector_encoding)
    #[arg(long)]
    pub vector_encoding: Option<VectorEncoding>,

    /// Namespace for generated declarations (overrides [sdk].namespace)
    #[arg(long)]
    pub namespace: Option<String>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let defs = EntityDefs::open(&self.defs).unwrap_or_exit();
        let registry = backends::registry();

        let report = ops::generate(
            &defs,
            &registry,
            GenerateOptions {
                output_dir: &self.output,
                backend: self.backend.as_deref(),
                vector_encoding: self.vector_encoding,
                namespace: self.namespace.as_deref(),
                dry_run: self.dry_run,
            },
        )?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
