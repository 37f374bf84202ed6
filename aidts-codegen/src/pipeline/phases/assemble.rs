//! Assemble phase - produces the ordered declaration set.

use eyre::Result;
use tracing::info;

use crate::{
    declarations::assemble,
    pipeline::{CompilationContext, Phase},
};

/// Sorts containers and appends schema-derived declarations.
pub struct AssemblePhase;

impl Phase for AssemblePhase {
    fn name(&self) -> &'static str {
        "assemble"
    }

    fn description(&self) -> &'static str {
        "Order declarations for output"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let builder = std::mem::take(&mut ctx.builder);
        let schema_interfaces = std::mem::take(&mut ctx.schema_interfaces);
        let declarations = assemble(builder, schema_interfaces);

        info!(
            aliases = declarations.aliases.len(),
            containers = declarations.containers.len(),
            schema_derived = declarations.schema_derived.len(),
            "assembled declarations"
        );
        ctx.declarations = Some(declarations);
        Ok(())
    }
}
