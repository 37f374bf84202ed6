//! TypeScript renderer for aidts declarations.
//!
//! Turns the [`Declarations`](aidts_codegen::Declarations) produced by the
//! pipeline into one TypeScript file, and compiles embedded JSON-Schema
//! fragments into additional declarations.
//!
//! ```ignore
//! use aidts_codegen::Pipeline;
//! use aidts_codegen_typescript::{Generator, JsonSchemaCompiler};
//!
//! let ctx = Pipeline::new()
//!     .schema_compiler(JsonSchemaCompiler::new())
//!     .run(snapshot)?;
//! let generator = Generator::from_context(ctx)?;
//!
//! // Preview without writing
//! let code = generator.render();
//!
//! // Write to disk
//! generator.generate(Path::new("aidbox.ts"))?;
//! ```

mod code_file;
mod generator;
mod schema_compiler;
mod type_expr;

pub mod ast;

pub use code_file::{CodeFile, RawCode};
pub use generator::{GenerateResult, Generator, HEADER};
pub use schema_compiler::JsonSchemaCompiler;
pub use type_expr::{TYPE_PARAMETER, render_type, render_type_param, string_literal};
