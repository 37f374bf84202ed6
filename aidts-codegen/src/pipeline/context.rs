//! Compilation context passed through pipeline phases.

use aidts_ir::SchemaSnapshot;
use eyre::{Result, eyre};
use indexmap::IndexMap;

use super::diagnostic::Diagnostic;
use crate::declarations::{CompiledSchema, DeclarationBuilder, Declarations, Grouping};

/// State threaded through every phase.
///
/// Each phase reads what earlier phases produced and fills in its own field;
/// nothing outside the context is mutated.
#[derive(Debug)]
pub struct CompilationContext {
    /// The raw fetched records.
    pub snapshot: SchemaSnapshot,
    /// Records grouped by entity (populated by `OrderPhase`).
    pub grouping: Option<Grouping>,
    /// The container map under construction.
    pub builder: DeclarationBuilder,
    /// Compiled schema declarations keyed by name (populated by
    /// `CompileSchemasPhase`).
    pub schema_interfaces: IndexMap<String, CompiledSchema>,
    /// The final declaration set (populated by `AssemblePhase`).
    pub declarations: Option<Declarations>,
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    pub fn new(snapshot: SchemaSnapshot) -> Self {
        Self {
            snapshot,
            grouping: None,
            builder: DeclarationBuilder::new(),
            schema_interfaces: IndexMap::new(),
            declarations: None,
            diagnostics: Vec::new(),
        }
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn info_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_info())
            .count()
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_warning())
    }

    /// Borrow the grouping produced by `OrderPhase`.
    pub fn grouping(&self) -> Result<&Grouping> {
        self.grouping
            .as_ref()
            .ok_or_else(|| eyre!("records not grouped - did OrderPhase run?"))
    }

    /// Take the final declarations out of the context.
    pub fn take_declarations(&mut self) -> Result<Declarations> {
        self.declarations
            .take()
            .ok_or_else(|| eyre!("declarations not assembled - did AssemblePhase run?"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping_requires_order_phase() {
        let ctx = CompilationContext::new(SchemaSnapshot::default());
        assert!(ctx.grouping().is_err());
    }

    #[test]
    fn test_diagnostic_counts() {
        let mut ctx = CompilationContext::new(SchemaSnapshot::default());

        ctx.diagnostics.push(Diagnostic::warning("resolve", "type information unavailable"));
        ctx.diagnostics.push(Diagnostic::info("resolve", "duplicate member ignored"));
        ctx.diagnostics.push(Diagnostic::info("order", "duplicate entity record ignored"));

        assert_eq!(ctx.warning_count(), 1);
        assert_eq!(ctx.info_count(), 2);
        assert_eq!(ctx.warnings().next().map(|d| d.phase), Some("resolve"));
    }

    #[test]
    fn test_take_declarations_requires_assembly() {
        let mut ctx = CompilationContext::new(SchemaSnapshot::default());
        assert!(ctx.take_declarations().is_err());

        ctx.declarations = Some(Declarations::default());
        assert!(ctx.take_declarations().is_ok());
        assert!(ctx.declarations.is_none());
    }
}
