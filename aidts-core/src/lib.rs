//! Core utilities and types for the aidts type generator.
//!
//! This crate provides the naming scheme used to turn schema paths into
//! identifiers, and the file abstraction used to write generated output.

mod file;
mod naming;

// File operations
pub use file::{GeneratedFile, WriteResult};
// Name synthesis
pub use naming::{
    capitalize, is_bare_identifier, path_to_pascal_case, property_name, to_camel_case,
};
