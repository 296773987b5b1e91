//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from loading entity definitions.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the definitions file.
    pub defs_path: PathBuf,
    /// Declared types, `ALIAS = definition`, in registry order.
    pub types: Vec<String>,
    pub modules: Vec<ModuleSummary>,
    /// Server errors as `id NAME`.
    pub errors: Vec<String>,
}

/// Client-facing view of one entity module.
#[derive(Debug)]
pub struct ModuleSummary {
    pub name: String,
    pub has_client: bool,
    pub properties: Vec<String>,
    pub methods: Vec<String>,
}

fn plural(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, if count == 1 { "" } else { "s" })
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&format!("✓ {} is valid", self.defs_path.display()));
        out.newline();

        out.section(&plural(self.types.len(), "type"));
        for ty in &self.types {
            out.list_item(ty);
        }
        out.newline();

        out.section(&plural(self.modules.len(), "entity module"));
        for module in &self.modules {
            if !module.has_client {
                out.list_item(&format!("{} (server only)", module.name));
                continue;
            }
            out.list_item(&module.name);
            for property in &module.properties {
                out.nested_item(property);
            }
            for method in &module.methods {
                out.nested_item(&format!("fn {}", method));
            }
        }

        if !self.errors.is_empty() {
            out.newline();
            out.section(&plural(self.errors.len(), "server error"));
            for error in &self.errors {
                out.list_item(error);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    #[test]
    fn test_render() {
        let report = CheckReport {
            defs_path: PathBuf::from("entities.toml"),
            types: vec!["ENTITY_ID = INT32".to_string()],
            modules: vec![
                ModuleSummary {
                    name: "Avatar".to_string(),
                    has_client: true,
                    properties: vec!["hp: UINT16".to_string()],
                    methods: vec!["say(STRING)".to_string()],
                },
                ModuleSummary {
                    name: "Account".to_string(),
                    has_client: false,
                    properties: vec![],
                    methods: vec![],
                },
            ],
            errors: vec![],
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "✓ entities.toml is valid",
                "",
                "1 type:",
                "- ENTITY_ID = INT32",
                "",
                "2 entity modules:",
                "- Avatar",
                "    hp: UINT16",
                "    fn say(STRING)",
                "- Account (server only)",
            ]
        );
    }
}
