//! Language-agnostic core of the aidts generator.
//!
//! Turns fetched Entity/Attribute records into an ordered set of type
//! declarations that a target-language renderer can emit.
//!
//! # Module Organization
//!
//! - [`builder`] - Fragments and the indented source writer
//! - [`declarations`] - Path normalization, type resolution and the declaration model
//! - [`pipeline`] - Phase pipeline and diagnostics
//! - [`schema`] - Seam for external schema-fragment compilers

pub mod builder;
pub mod declarations;
pub mod pipeline;
pub mod schema;

pub use declarations::{
    CompiledSchema, Container, Declarations, Member, PrimitiveAlias, TypeExpr, TypeParam,
};
pub use pipeline::{CompilationContext, Diagnostic, Pipeline, Severity};
pub use schema::{SchemaCompileError, SchemaCompiler};
