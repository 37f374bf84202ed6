//! Order phase - groups records by owning entity.

use eyre::Result;
use tracing::{info, warn};

use crate::{
    declarations::group_entities,
    pipeline::{CompilationContext, Diagnostic, Phase},
};

/// Groups attributes under their entity and sorts both deterministically.
///
/// Attributes whose owning entity was not fetched are dropped with a warning.
pub struct OrderPhase;

impl Phase for OrderPhase {
    fn name(&self) -> &'static str {
        "order"
    }

    fn description(&self) -> &'static str {
        "Group and sort entity and attribute records"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let grouping = group_entities(&ctx.snapshot);

        for orphan in &grouping.orphans {
            warn!(
                attribute = %orphan.id,
                entity = %orphan.entity_id(),
                "dropping attribute of unknown entity"
            );
            ctx.diagnostics.push(
                Diagnostic::warning(
                    self.name(),
                    format!("owning entity `{}` was not fetched", orphan.entity_id()),
                )
                .about(&orphan.id),
            );
        }
        for id in &grouping.duplicate_entities {
            ctx.diagnostics
                .push(Diagnostic::info(self.name(), "duplicate entity record ignored").about(id));
        }

        info!(
            entities = grouping.groups.len(),
            attributes = ctx.snapshot.attributes.len() - grouping.orphans.len(),
            "grouped schema records"
        );
        ctx.grouping = Some(grouping);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use aidts_ir::{Attribute, Entity, SchemaSnapshot};

    use super::*;

    #[test]
    fn test_order_phase_reports_orphans() {
        let snapshot = SchemaSnapshot::new(
            vec![Entity::new("Patient")],
            vec![
                Attribute::new("Patient", ["active"]),
                Attribute::new("Ghost", ["name"]),
            ],
        );
        let mut ctx = CompilationContext::new(snapshot);

        OrderPhase.run(&mut ctx).expect("order should succeed");

        let grouping = ctx.grouping().expect("grouping set");
        assert_eq!(grouping.groups.len(), 1);
        assert_eq!(grouping.groups[0].attributes.len(), 1);
        assert_eq!(ctx.warning_count(), 1);
        let warning = ctx.warnings().next().unwrap();
        assert_eq!(warning.record.as_deref(), Some("Ghost.name"));
    }
}
