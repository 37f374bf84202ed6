use super::{Fragment, Renderable};

/// Accumulates indented output lines.
///
/// ```
/// use aidts_codegen::builder::{Fragment, SourceWriter};
///
/// let mut writer = SourceWriter::new();
/// writer.write(Fragment::block(
///     "export interface Meta {",
///     vec![Fragment::line("versionId?: string;")],
///     "}",
/// ));
/// assert_eq!(writer.finish(), "export interface Meta {\n  versionId?: string;\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct SourceWriter {
    unit: &'static str,
    depth: usize,
    out: String,
}

impl SourceWriter {
    /// Two-space indentation.
    pub fn new() -> Self {
        Self::with_indent("  ")
    }

    pub fn with_indent(unit: &'static str) -> Self {
        Self {
            unit,
            depth: 0,
            out: String::new(),
        }
    }

    pub fn line(&mut self, text: &str) -> &mut Self {
        for _ in 0..self.depth {
            self.out.push_str(self.unit);
        }
        self.out.push_str(text);
        self.out.push('\n');
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.out.push('\n');
        self
    }

    /// `/** text */` on one line, or a ` * `-prefixed block for multi-line
    /// text. `*/` inside the text is escaped.
    pub fn doc(&mut self, text: &str) -> &mut Self {
        let text = text.trim().replace("*/", "*\\/");
        if !text.contains('\n') {
            return self.line(&format!("/** {} */", text));
        }
        self.line("/**");
        for line in text.lines().map(str::trim_end) {
            if line.is_empty() {
                self.line(" *");
            } else {
                self.line(&format!(" * {}", line));
            }
        }
        self.line(" */")
    }

    pub fn write(&mut self, fragment: Fragment) -> &mut Self {
        match fragment {
            Fragment::Line(text) => self.line(&text),
            Fragment::Doc(text) => self.doc(&text),
            Fragment::Block { open, body, close } => {
                self.line(&open);
                self.depth += 1;
                for inner in body {
                    self.write(inner);
                }
                self.depth -= 1;
                self.line(&close)
            }
        }
    }

    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.fragments() {
            self.write(fragment);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    pub fn finish(self) -> String {
        self.out
    }
}

impl Default for SourceWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a single node with the default indentation.
pub fn render(node: &impl Renderable) -> String {
    let mut writer = SourceWriter::new();
    writer.emit(node);
    writer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_blocks() {
        let mut writer = SourceWriter::new();
        writer.write(Fragment::block(
            "export interface Bundle {",
            vec![Fragment::block("meta?: {", vec![Fragment::line("tag?: string;")], "};")],
            "}",
        ));
        assert_eq!(
            writer.finish(),
            "export interface Bundle {\n  meta?: {\n    tag?: string;\n  };\n}\n"
        );
    }

    #[test]
    fn test_custom_indent() {
        let mut writer = SourceWriter::with_indent("\t");
        writer.write(Fragment::block("{", vec![Fragment::line("x: number;")], "}"));
        assert_eq!(writer.finish(), "{\n\tx: number;\n}\n");
    }

    #[test]
    fn test_blank_line() {
        let mut writer = SourceWriter::new();
        writer.line("export type id = string;").blank().line("export type uri = string;");
        assert_eq!(writer.finish(), "export type id = string;\n\nexport type uri = string;\n");
    }

    #[test]
    fn test_single_line_doc() {
        let mut writer = SourceWriter::new();
        writer.doc("  A patient  ");
        assert_eq!(writer.finish(), "/** A patient */\n");
    }

    #[test]
    fn test_multi_line_doc_is_indented() {
        let mut writer = SourceWriter::new();
        writer.write(Fragment::block(
            "export interface Patient {",
            vec![Fragment::doc("First line\n\nThird line"), Fragment::line("active?: boolean;")],
            "}",
        ));
        assert_eq!(
            writer.finish(),
            "export interface Patient {\n  /**\n   * First line\n   *\n   * Third line\n   */\n  active?: boolean;\n}\n"
        );
    }

    #[test]
    fn test_doc_escapes_terminator() {
        let mut writer = SourceWriter::new();
        writer.doc("ends */ early");
        assert_eq!(writer.finish(), "/** ends *\\/ early */\n");
    }

    #[test]
    fn test_render_reference() {
        struct Alias;
        impl Renderable for Alias {
            fn fragments(&self) -> Vec<Fragment> {
                vec![Fragment::doc("Identifier"), Fragment::line("export type id = string;")]
            }
        }

        assert!(SourceWriter::new().is_empty());
        assert_eq!(render(&&Alias), "/** Identifier */\nexport type id = string;\n");
    }
}
