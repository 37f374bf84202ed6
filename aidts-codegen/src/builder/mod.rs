//! Line-oriented output for the language renderers.
//!
//! Declarations describe themselves as [`Fragment`]s through [`Renderable`];
//! a [`SourceWriter`] lays the fragments out with indentation and doc
//! comments.

mod fragment;
mod writer;

pub use fragment::{Fragment, Renderable};
pub use writer::{SourceWriter, render};
