use std::path::PathBuf;

use clap::Args;
use entsdk_defs::{DEFAULT_FILENAME, EntityDefs};
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the entity definitions
    #[arg(short, long, default_value = DEFAULT_FILENAME)]
    pub defs: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let defs = EntityDefs::open(&self.defs).unwrap_or_exit();

        let report = ops::check(&defs, &self.defs);
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
