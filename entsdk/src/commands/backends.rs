use clap::Args;
use eyre::Result;

use crate::{
    backends,
    reports::{BackendsReport, Report, TerminalOutput},
};

#[derive(Args)]
pub struct BackendsCommand {}

impl BackendsCommand {
    pub fn run(&self) -> Result<()> {
        let registry = backends::registry();
        let report = BackendsReport {
            names: registry.names().map(str::to_string).collect(),
        };
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
