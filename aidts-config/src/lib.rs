//! Configuration for the aidts generator.
//!
//! An optional `aidts.toml` supplies defaults; command-line [`Overrides`]
//! take precedence. [`Config::resolve`] merges both into the [`Settings`] of
//! one run. Errors are [`miette`] diagnostics pointing into the file.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod settings;

pub use config::{AuthConfig, CONFIG_FILE, Config, Mode, OutputConfig, ServerConfig};
pub use error::{Document, Error, Result};
pub use settings::{Credentials, DEFAULT_PAGE_SIZE, Overrides, Settings, Source};
