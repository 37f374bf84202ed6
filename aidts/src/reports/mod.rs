//! Report data structures.
//!
//! Operations build reports, then render them to an Output target.

mod generate;
mod output;

pub use generate::{GenerateReport, GenerationResult, PreviewFile};
pub use output::{Report, TerminalOutput};
