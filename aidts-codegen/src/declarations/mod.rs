//! Schema-to-declaration mapping.
//!
//! This module turns grouped entity/attribute records into named type
//! declarations:
//!
//! - [`catalog`] - fixed base containers, markers and the generic family table
//! - [`path`] - Path Normalizer, attribute path → (container, member)
//! - [`resolve`] - Type Resolver, attribute → [`TypeExpr`]
//! - [`builder`] - Declaration Builder, the two-pass container accumulator
//! - [`order`] - grouping and deterministic ordering of records and output

pub mod builder;
pub mod catalog;
pub mod order;
pub mod path;
pub mod resolve;
mod types;

pub use builder::{Append, DeclarationBuilder};
pub use order::{Grouping, assemble, group_entities};
pub use path::{MemberTarget, NormalizedPath, normalize};
pub use resolve::{AttributeIndex, Resolver, Rule};
pub use types::{CompiledSchema, Container, Declarations, Member, PrimitiveAlias, TypeExpr, TypeParam};
