//! TypeScript declaration nodes, rendered through
//! [`SourceWriter`](aidts_codegen::builder::SourceWriter).

mod interface;
mod type_alias;

pub use interface::{Interface, Property};
pub use type_alias::TypeAlias;
