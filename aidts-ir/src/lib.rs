//! Schema record types for the aidts type generator.
//!
//! These types mirror the `Entity` and `Attribute` resources a server
//! exposes for its resource model. They are deserialized once per run and
//! never mutated afterwards.
//!
//! # Architecture
//!
//! ```text
//! server ($dump / bundle) → aidts-client → aidts-ir (records) → aidts-codegen → TypeScript
//! ```

mod attribute;
mod entity;
mod snapshot;

pub use attribute::{Attribute, ResourceRef, TypeRef};
pub use entity::{Entity, EntityKind, Provenance};
pub use snapshot::{EntityWithAttributes, SchemaSnapshot};

/// Path segment marking "declare a container, but no member".
pub const WILDCARD: &str = "*";
