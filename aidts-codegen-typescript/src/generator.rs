//! TypeScript declaration file generator.

use std::path::{Path, PathBuf};

use aidts_codegen::{CompilationContext, Declarations};
use aidts_core::{GeneratedFile, WriteResult};
use eyre::Result;
use tracing::info;

use crate::{
    ast::{Interface, TypeAlias},
    code_file::{CodeFile, RawCode},
};

/// First line of every generated file.
pub const HEADER: &str = "Aidbox TypeScript annotations, generated by aidts. Do not edit.";

/// Renders a declaration set as a single `.d.ts`-style file.
#[derive(Debug, Clone)]
pub struct Generator {
    declarations: Declarations,
}

/// Outcome of [`Generator::generate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateResult {
    pub path: PathBuf,
    pub write: WriteResult,
}

impl Generator {
    pub fn new(declarations: Declarations) -> Self {
        Self { declarations }
    }

    /// Take the assembled declarations out of a finished pipeline run.
    pub fn from_context(mut ctx: CompilationContext) -> Result<Self> {
        Ok(Self::new(ctx.take_declarations()?))
    }

    pub fn declarations(&self) -> &Declarations {
        &self.declarations
    }

    /// Render the whole file.
    ///
    /// Layout: header, primitive aliases, containers sorted by name, then
    /// schema-derived declarations in compile order.
    pub fn render(&self) -> String {
        let declarations = &self.declarations;
        CodeFile::new()
            .header(HEADER)
            .compact(declarations.aliases.iter().map(TypeAlias::from))
            .section(declarations.containers.iter().map(Interface::from))
            .section(
                declarations
                    .schema_derived
                    .iter()
                    .map(|schema| RawCode::new(&schema.source)),
            )
            .render()
    }

    /// The file that would be written to `path`.
    pub fn preview(&self, path: impl Into<PathBuf>) -> GeneratedFile {
        GeneratedFile::new(path, self.render())
    }

    /// Write the file, leaving it untouched when the content is identical.
    pub fn generate(&self, path: &Path) -> Result<GenerateResult> {
        let write = self.preview(path).write_if_changed()?;
        info!(path = %path.display(), ?write, "wrote declarations");
        Ok(GenerateResult {
            path: path.to_path_buf(),
            write,
        })
    }
}
