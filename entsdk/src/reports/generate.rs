//! Generate command report data structures.

use std::path::{Path, PathBuf};

use entsdk_codegen::{GeneratorConfig, PreviewFile};

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Identifier of the backend that ran.
    pub backend: String,

    /// Effective configuration after flags and `[sdk]` were merged.
    pub config: GeneratorConfig,

    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk, in generation order.
    Written {
        output_dir: PathBuf,
        files: Vec<PathBuf>,
    },
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written { output_dir, files } => {
                self.render_written(out, output_dir, files)
            }
            GenerationResult::Preview(files) => self.render_preview(out, files),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, output_dir: &Path, files: &[PathBuf]) {
        out.key_value("Backend", &self.backend);
        out.key_value("Vector encoding", self.config.vector_encoding.as_str());
        out.key_value("Namespace", &self.config.namespace);
        out.newline();

        out.section(&format!("Generated ({})", files.len()));
        for file in files {
            let shown = file.strip_prefix(output_dir).unwrap_or(file);
            out.added_item(&shown.display().to_string());
        }
        out.newline();
        out.key_value("Output", &output_dir.display().to_string());
    }

    fn render_preview(&self, out: &mut dyn Output, files: &[PreviewFile]) {
        for file in files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!(
            "{} files would be generated by the {} backend",
            files.len(),
            self.backend
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    #[test]
    fn test_render_written() {
        let report = GenerateReport {
            backend: "unity".to_string(),
            config: GeneratorConfig::default(),
            result: GenerationResult::Written {
                output_dir: PathBuf::from("out"),
                files: vec![
                    PathBuf::from("out/EntityTypes.cs"),
                    PathBuf::from("out/Avatar.cs"),
                ],
            },
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "Backend: unity",
                "Vector encoding: floating",
                "Namespace: EntitySdk",
                "",
                "Generated (2):",
                "+ EntityTypes.cs",
                "+ Avatar.cs",
                "",
                "Output: out",
            ]
        );
    }

    #[test]
    fn test_render_preview() {
        let report = GenerateReport {
            backend: "ue4".to_string(),
            config: GeneratorConfig::default(),
            result: GenerationResult::Preview(vec![PreviewFile {
                path: "EntityTypes.h".to_string(),
                content: "#pragma once\n".to_string(),
            }]),
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "-- EntityTypes.h --",
                "#pragma once\n",
                "-- Summary --",
                "1 files would be generated by the ue4 backend",
            ]
        );
    }
}
