//! Schema retrieval for the aidts type generator.
//!
//! Records come either from a running server ([`SchemaClient`]) or from a
//! directory of NDJSON files ([`read_snapshot`]).

mod auth;
mod client;
mod error;
mod local;
mod ndjson;

pub use auth::Auth;
pub use client::{FetchMode, SchemaClient};
pub use error::FetchError;
pub use local::{ATTRIBUTE_FILE, ENTITY_FILE, read_snapshot};
pub use ndjson::parse_ndjson;
