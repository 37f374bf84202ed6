//! Built-in pipeline phases, in execution order.

use eyre::{Result, eyre};

use crate::declarations::Grouping;

mod assemble;
mod compile_schemas;
mod declare;
mod order;
mod resolve;

pub use assemble::AssemblePhase;
pub use compile_schemas::CompileSchemasPhase;
pub use declare::DeclarePhase;
pub use order::OrderPhase;
pub use resolve::ResolvePhase;

/// Field-level access to the grouping, so phases can keep borrowing it while
/// mutating the builder.
fn require_grouping(grouping: &Option<Grouping>) -> Result<&Grouping> {
    grouping
        .as_ref()
        .ok_or_else(|| eyre!("records not grouped - did OrderPhase run?"))
}
