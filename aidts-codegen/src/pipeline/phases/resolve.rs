//! Resolve phase - pass 2, one member per attribute.

use eyre::Result;
use tracing::{debug, info, trace, warn};

use super::require_grouping;
use crate::{
    declarations::{Append, AttributeIndex, NormalizedPath, Resolver, Rule, normalize},
    pipeline::{CompilationContext, Diagnostic, Phase},
};

/// Resolves every attribute and appends the resulting member.
///
/// Attributes are visited deepest-first within each entity so nested
/// containers exist before the members that reference them.
pub struct ResolvePhase;

impl Phase for ResolvePhase {
    fn name(&self) -> &'static str {
        "resolve"
    }

    fn description(&self) -> &'static str {
        "Resolve attribute types and append members"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let grouping = require_grouping(&ctx.grouping)?;
        let mut appended = 0usize;

        for group in &grouping.groups {
            let entity = &group.entity;
            if entity.is_primitive() {
                if !group.attributes.is_empty() {
                    debug!(entity = %entity.id, "ignoring attributes of primitive entity");
                }
                continue;
            }
            let index = AttributeIndex::new(group);

            for attribute in &group.attributes {
                let target = match normalize(&entity.id, &attribute.path) {
                    NormalizedPath::Member(target) => target,
                    NormalizedPath::ContainerOnly { container } => {
                        trace!(attribute = %attribute.id, %container, "container marker");
                        ctx.builder.ensure_container(&container);
                        continue;
                    }
                    NormalizedPath::Suppressed => {
                        trace!(attribute = %attribute.id, "implicit member suppressed");
                        continue;
                    }
                };

                let (member, rule) =
                    Resolver::new(entity, &index, &ctx.builder, &ctx.schema_interfaces)
                        .member(attribute, &target);

                if rule == Rule::Unknown {
                    warn!(attribute = %attribute.id, "no type information, using unknown");
                    ctx.diagnostics.push(
                        Diagnostic::warning(self.name(), "type information unavailable")
                            .about(&attribute.id),
                    );
                }

                match ctx.builder.append_member(&target.container, member) {
                    Append::Added | Append::CreatedContainer => appended += 1,
                    Append::Duplicate => {
                        debug!(
                            attribute = %attribute.id,
                            container = %target.container,
                            member = %target.member,
                            "duplicate member ignored"
                        );
                        ctx.diagnostics.push(
                            Diagnostic::info(
                                self.name(),
                                format!(
                                    "duplicate member `{}` on `{}` ignored",
                                    target.member, target.container
                                ),
                            )
                            .about(&attribute.id),
                        );
                    }
                }
            }
        }

        info!(members = appended, containers = ctx.builder.container_count(), "resolved attributes");
        Ok(())
    }
}
