//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod backends;
mod check;
mod generate;
mod output;

pub use backends::BackendsReport;
pub use check::{CheckReport, ModuleSummary};
pub use generate::{GenerateReport, GenerationResult};
pub use output::{Report, TerminalOutput};
