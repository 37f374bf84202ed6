//! Generate report data structures.

use std::path::PathBuf;

use aidts_core::WriteResult;

use super::output::{Output, Report};

/// Printed once the declarations are on disk.
pub const SUCCESS_MESSAGE: &str = "Aidbox TypeScript annotations are successfully generated";

/// Report data from one generator run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Base URL or snapshot directory the records came from.
    pub source: String,
    pub alias_count: usize,
    pub container_count: usize,
    pub schema_count: usize,
    pub warning_count: usize,
    /// Number of info diagnostics (ignored duplicates and the like).
    pub info_count: usize,
    pub result: GenerationResult,
}

/// Result of rendering the declarations.
#[derive(Debug)]
pub enum GenerationResult {
    /// The output file was written or already up to date.
    Written { path: PathBuf, write: WriteResult },
    /// Dry-run preview.
    Preview(PreviewFile),
}

/// The file that would be written in a dry run.
#[derive(Debug)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        if let GenerationResult::Preview(file) = &self.result {
            out.rule(&file.path);
            out.text(&file.content);
            out.rule("Summary");
        }

        out.field("Source", &self.source);
        out.field("Primitive aliases", &self.alias_count.to_string());
        out.field("Containers", &self.container_count.to_string());
        out.field("Schema-derived", &self.schema_count.to_string());
        out.field("Warnings", &self.warning_count.to_string());
        if self.info_count > 0 {
            out.field("Ignored duplicates", &self.info_count.to_string());
        }

        match &self.result {
            GenerationResult::Written { path, write } => {
                let label = match write {
                    WriteResult::Written => "Generated",
                    WriteResult::Unchanged => "Unchanged",
                };
                out.field(label, &path.display().to_string());
                out.gap();
                out.text(SUCCESS_MESSAGE);
            }
            GenerationResult::Preview(file) => {
                out.text(&format!("{} would be generated", file.path));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        lines: Vec<String>,
    }

    impl Output for Recorder {
        fn field(&mut self, label: &str, value: &str) {
            self.lines.push(format!("{}: {}", label, value));
        }

        fn rule(&mut self, label: &str) {
            self.lines.push(format!("-- {} --", label));
        }

        fn text(&mut self, text: &str) {
            self.lines.push(text.to_string());
        }

        fn gap(&mut self) {
            self.lines.push(String::new());
        }
    }

    fn report(result: GenerationResult) -> GenerateReport {
        GenerateReport {
            source: "http://localhost:8888".to_string(),
            alias_count: 2,
            container_count: 5,
            schema_count: 1,
            warning_count: 1,
            info_count: 0,
            result,
        }
    }

    #[test]
    fn test_written_report_ends_with_success() {
        let mut out = Recorder::default();
        report(GenerationResult::Written {
            path: PathBuf::from("aidbox.ts"),
            write: WriteResult::Written,
        })
        .render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "Source: http://localhost:8888",
                "Primitive aliases: 2",
                "Containers: 5",
                "Schema-derived: 1",
                "Warnings: 1",
                "Generated: aidbox.ts",
                "",
                SUCCESS_MESSAGE,
            ]
        );
    }

    #[test]
    fn test_preview_report_prints_content() {
        let mut out = Recorder::default();
        report(GenerationResult::Preview(PreviewFile {
            path: "aidbox.ts".to_string(),
            content: "export type uri = string;".to_string(),
        }))
        .render(&mut out);

        assert_eq!(out.lines[0], "-- aidbox.ts --");
        assert_eq!(out.lines[1], "export type uri = string;");
        assert_eq!(out.lines[2], "-- Summary --");
        assert!(!out.lines.contains(&SUCCESS_MESSAGE.to_string()));
    }
}
