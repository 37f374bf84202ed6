//! Declare phase - pass 1, one declaration per entity.

use eyre::Result;
use tracing::{debug, info};

use super::require_grouping;
use crate::pipeline::{CompilationContext, Diagnostic, Phase};

/// Creates every entity's alias or container before any member is resolved,
/// so later references can find them.
pub struct DeclarePhase;

impl Phase for DeclarePhase {
    fn name(&self) -> &'static str {
        "declare"
    }

    fn description(&self) -> &'static str {
        "Declare one alias or container per entity"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let grouping = require_grouping(&ctx.grouping)?;
        let mut clashes = Vec::new();

        for group in &grouping.groups {
            let entity = &group.entity;
            if ctx.builder.declare_entity(entity) {
                debug!(entity = %entity.id, kind = ?entity.kind, "declared entity");
            } else {
                clashes.push(entity.id.clone());
            }
        }

        for id in clashes {
            debug!(entity = %id, "declaration already exists");
            ctx.diagnostics
                .push(Diagnostic::info(self.name(), "declaration already exists").about(id));
        }

        info!(
            containers = ctx.builder.container_count(),
            aliases = ctx.builder.alias_count(),
            "declared entities"
        );
        Ok(())
    }
}
