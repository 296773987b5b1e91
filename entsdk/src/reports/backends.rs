//! Backends command report.

use super::output::{Output, Report};

/// Registered backend identifiers.
#[derive(Debug)]
pub struct BackendsReport {
    pub names: Vec<String>,
}

impl Report for BackendsReport {
    fn render(&self, out: &mut dyn Output) {
        out.section("Backends");
        for name in &self.names {
            out.list_item(name);
        }
    }
}
