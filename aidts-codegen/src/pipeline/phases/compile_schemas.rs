//! Compile-schemas phase - delegates embedded schema fragments.

use std::sync::Arc;

use eyre::Result;
use tracing::{debug, info, warn};

use super::require_grouping;
use crate::{
    declarations::{CompiledSchema, NormalizedPath, normalize},
    pipeline::{CompilationContext, Diagnostic, Phase},
    schema::SchemaCompiler,
};

/// Compiles every attribute's embedded schema under the attribute's
/// property-interface name.
///
/// A failed compilation is recorded as a warning and leaves no entry, so the
/// member falls back to whatever the remaining resolution rules produce.
pub struct CompileSchemasPhase {
    compiler: Option<Arc<dyn SchemaCompiler>>,
}

impl CompileSchemasPhase {
    pub fn new(compiler: Option<Arc<dyn SchemaCompiler>>) -> Self {
        Self { compiler }
    }
}

impl Phase for CompileSchemasPhase {
    fn name(&self) -> &'static str {
        "compile-schemas"
    }

    fn description(&self) -> &'static str {
        "Compile embedded schema fragments"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let Some(compiler) = &self.compiler else {
            debug!("no schema compiler configured, skipping");
            return Ok(());
        };
        let grouping = require_grouping(&ctx.grouping)?;

        for group in grouping.groups.iter().filter(|g| !g.entity.is_primitive()) {
            for attribute in &group.attributes {
                let Some(fragment) = &attribute.schema else {
                    continue;
                };
                let NormalizedPath::Member(target) =
                    normalize(&group.entity.id, &attribute.path)
                else {
                    continue;
                };
                let name = target.property_interface;
                if ctx.schema_interfaces.contains_key(&name) {
                    continue;
                }

                match compiler.compile(&name, fragment) {
                    Ok(source) => {
                        debug!(attribute = %attribute.id, %name, "compiled schema");
                        ctx.schema_interfaces.insert(
                            name.clone(),
                            CompiledSchema {
                                name,
                                attribute_id: attribute.id.clone(),
                                source,
                            },
                        );
                    }
                    Err(err) => {
                        warn!(attribute = %attribute.id, error = %err, "schema compilation failed");
                        ctx.diagnostics.push(
                            Diagnostic::warning(
                                self.name(),
                                format!("schema compilation failed: {}", err),
                            )
                            .about(&attribute.id),
                        );
                    }
                }
            }
        }

        info!(count = ctx.schema_interfaces.len(), "compiled schemas");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use aidts_ir::{Attribute, Entity, SchemaSnapshot};
    use serde_json::json;

    use super::*;
    use crate::{pipeline::phases::OrderPhase, schema::SchemaCompileError};

    struct FakeCompiler;

    impl SchemaCompiler for FakeCompiler {
        fn compile(
            &self,
            name: &str,
            fragment: &serde_json::Value,
        ) -> Result<String, SchemaCompileError> {
            if fragment.get("$ref").is_some() {
                return Err(SchemaCompileError::UnsupportedKeyword {
                    keyword: "$ref".to_string(),
                    pointer: "#".to_string(),
                });
            }
            Ok(format!("export type {} = string;", name))
        }
    }

    fn context() -> CompilationContext {
        let snapshot = SchemaSnapshot::new(
            vec![Entity::new("Patient")],
            vec![
                Attribute::new("Patient", ["settings"]).schema(json!({"type": "string"})),
                Attribute::new("Patient", ["linked"]).schema(json!({"$ref": "#/x"})),
                Attribute::new("Patient", ["active"]).type_id("boolean"),
            ],
        );
        let mut ctx = CompilationContext::new(snapshot);
        OrderPhase.run(&mut ctx).unwrap();
        ctx
    }

    #[test]
    fn test_failures_are_isolated() {
        let mut ctx = context();
        CompileSchemasPhase::new(Some(Arc::new(FakeCompiler)))
            .run(&mut ctx)
            .unwrap();

        assert_eq!(ctx.schema_interfaces.len(), 1);
        let compiled = &ctx.schema_interfaces["PatientSettings"];
        assert_eq!(compiled.attribute_id, "Patient.settings");
        assert_eq!(compiled.source, "export type PatientSettings = string;");

        assert_eq!(ctx.warning_count(), 1);
        let warning = ctx.warnings().next().unwrap();
        assert_eq!(warning.record.as_deref(), Some("Patient.linked"));
    }

    #[test]
    fn test_without_compiler_is_noop() {
        let mut ctx = context();
        CompileSchemasPhase::new(None).run(&mut ctx).unwrap();
        assert!(ctx.schema_interfaces.is_empty());
        assert!(ctx.diagnostics.is_empty());
    }
}
