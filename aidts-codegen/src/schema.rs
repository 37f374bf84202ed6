//! Seam for compiling embedded schema fragments into declarations.

use thiserror::Error;

/// Reasons a schema fragment could not be compiled.
#[derive(Debug, Error)]
pub enum SchemaCompileError {
    #[error("unsupported schema keyword `{keyword}` at {pointer}")]
    UnsupportedKeyword { keyword: String, pointer: String },
    #[error("unknown schema type `{name}` at {pointer}")]
    UnknownType { name: String, pointer: String },
    #[error("invalid schema at {pointer}: {message}")]
    Invalid { pointer: String, message: String },
}

/// Compiles one raw schema fragment into a named declaration.
///
/// Implementations are target-language specific; the returned text is
/// appended to the output verbatim.
pub trait SchemaCompiler: Send + Sync {
    fn compile(&self, name: &str, fragment: &serde_json::Value) -> Result<String, SchemaCompileError>;
}
