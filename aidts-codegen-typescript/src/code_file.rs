//! Layout of the generated declaration file.

use aidts_codegen::builder::{Fragment, Renderable, SourceWriter};

/// A `//` comment header followed by groups of declarations.
///
/// Groups are separated by a blank line. Inside a spaced group every
/// declaration is followed by a blank line too; a compact group keeps its
/// declarations on consecutive lines. Empty groups are dropped.
#[derive(Debug, Default)]
pub struct CodeFile {
    header: Vec<String>,
    groups: Vec<Group>,
}

#[derive(Debug)]
struct Group {
    spaced: bool,
    items: Vec<Vec<Fragment>>,
}

impl CodeFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(mut self, line: impl Into<String>) -> Self {
        self.header.push(line.into());
        self
    }

    /// Declarations separated by blank lines.
    pub fn section<R: Renderable>(self, nodes: impl IntoIterator<Item = R>) -> Self {
        self.group(true, nodes)
    }

    /// Declarations on consecutive lines.
    pub fn compact<R: Renderable>(self, nodes: impl IntoIterator<Item = R>) -> Self {
        self.group(false, nodes)
    }

    fn group<R: Renderable>(mut self, spaced: bool, nodes: impl IntoIterator<Item = R>) -> Self {
        let items: Vec<_> = nodes.into_iter().map(|node| node.fragments()).collect();
        if !items.is_empty() {
            self.groups.push(Group { spaced, items });
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.header.is_empty() && self.groups.is_empty()
    }

    pub fn render(&self) -> String {
        let mut writer = SourceWriter::new();
        for line in &self.header {
            writer.line(&format!("// {}", line));
        }

        for group in &self.groups {
            for (i, item) in group.items.iter().enumerate() {
                if !writer.is_empty() && (i == 0 || group.spaced) {
                    writer.blank();
                }
                for fragment in item {
                    writer.write(fragment.clone());
                }
            }
        }
        writer.finish()
    }
}

/// Already rendered declarations, written line by line.
#[derive(Debug, Clone)]
pub struct RawCode(String);

impl RawCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }
}

impl Renderable for RawCode {
    fn fragments(&self) -> Vec<Fragment> {
        self.0.lines().map(Fragment::line).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file() {
        let file = CodeFile::new().compact(Vec::<RawCode>::new());
        assert!(file.is_empty());
        assert_eq!(file.render(), "");
    }

    #[test]
    fn test_header_then_body() {
        let file = CodeFile::new()
            .header("Generated")
            .section([RawCode::new("export type id = string;")]);
        assert_eq!(file.render(), "// Generated\n\nexport type id = string;\n");
    }

    #[test]
    fn test_compact_and_spaced_groups() {
        let file = CodeFile::new()
            .compact([
                RawCode::new("export type a = string;"),
                RawCode::new("export type b = number;"),
            ])
            .section([
                RawCode::new("export interface A {}"),
                RawCode::new("export interface B {}"),
            ]);

        assert_eq!(
            file.render(),
            "export type a = string;\nexport type b = number;\n\nexport interface A {}\n\nexport interface B {}\n"
        );
    }

    #[test]
    fn test_multi_line_raw_code() {
        let file = CodeFile::new().section([RawCode::new("export interface A {\n  x: number;\n}\n")]);
        assert_eq!(file.render(), "export interface A {\n  x: number;\n}\n");
    }
}
