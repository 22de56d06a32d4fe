//! ## Crate layout
//! - `core`: the runtime crate, re-exported whole.
//! - `lazy`: expressions over deferred predicates, evaluated on `result()`.
//! - `eager`: expressions over booleans the caller already computed.
//! - `predicate`: the deferred predicate trait and its combinators.
//! - `obs`: evaluation counters and the sink override.
//!
//! The `prelude` brings the expression types and the predicate trait into
//! scope; free functions stay under `lazy::` and `eager::`.

pub use wordlogic_core as core;

pub use wordlogic_core::{ExprError, eager, error, lazy, obs, predicate};

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use crate::core::prelude::*;
}
