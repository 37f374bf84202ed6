//! Declaration pipeline.
//!
//! A [`Pipeline`] runs explicit phases over a [`CompilationContext`] that owns
//! every intermediate result:
//!
//! - `order` - group records by entity and sort them
//! - `declare` - pass 1, one alias or container per entity
//! - `compile-schemas` - delegate embedded schema fragments
//! - `resolve` - pass 2, resolve and append every attribute's member
//! - `assemble` - produce the ordered [`Declarations`](crate::Declarations)
//!
//! Non-fatal problems are collected as [`Diagnostic`]s.
//!
//! # Example
//!
//! ```ignore
//! let ctx = Pipeline::new()
//!     .schema_compiler(JsonSchemaCompiler::new())
//!     .run(snapshot)?;
//!
//! for diag in ctx.warnings() {
//!     eprintln!("{}", diag);
//! }
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod runner;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use runner::Pipeline;
