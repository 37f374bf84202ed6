//! Pipeline orchestrator.

use std::sync::Arc;

use aidts_ir::SchemaSnapshot;
use eyre::Result;
use tracing::debug;

use super::{
    CompilationContext, Phase,
    phases::{AssemblePhase, CompileSchemasPhase, DeclarePhase, OrderPhase, ResolvePhase},
};
use crate::schema::SchemaCompiler;

/// The declaration pipeline.
///
/// Runs the built-in phases (order, declare, compile-schemas, resolve,
/// assemble) followed by any extra phases.
pub struct Pipeline {
    compiler: Option<Arc<dyn SchemaCompiler>>,
    phases: Vec<Box<dyn Phase>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self {
            compiler: None,
            phases: Vec::new(),
        }
    }

    /// Compile embedded schema fragments with this compiler.
    ///
    /// Without one, attributes carrying a schema resolve through the
    /// remaining rules only.
    pub fn schema_compiler(mut self, compiler: impl SchemaCompiler + 'static) -> Self {
        self.compiler = Some(Arc::new(compiler));
        self
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Run every phase over a fetched snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if any phase fails fatally.
    pub fn run(&self, snapshot: SchemaSnapshot) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(snapshot);

        let builtin_phases: Vec<Box<dyn Phase>> = vec![
            Box::new(OrderPhase),
            Box::new(DeclarePhase),
            Box::new(CompileSchemasPhase::new(self.compiler.clone())),
            Box::new(ResolvePhase),
            Box::new(AssemblePhase),
        ];

        for phase in builtin_phases.iter().chain(self.phases.iter()) {
            debug!(phase = phase.name(), "{}", phase.description());
            phase.run(&mut ctx)?;
        }

        Ok(ctx)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
