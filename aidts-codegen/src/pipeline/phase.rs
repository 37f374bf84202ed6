use eyre::Result;

use super::CompilationContext;

/// One step of the declaration pipeline.
///
/// Phases share nothing but the context. Problems that still allow output
/// are pushed to `ctx.diagnostics`; an `Err` aborts the run.
pub trait Phase: Send + Sync {
    /// Short name, used as the diagnostic source.
    fn name(&self) -> &'static str;

    /// One-line summary logged before the phase runs.
    fn description(&self) -> &'static str;

    fn run(&self, ctx: &mut CompilationContext) -> Result<()>;
}
