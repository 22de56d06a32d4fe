//! Core runtime for wordlogic: deferred predicates, the lazy expression
//! engine, the eager variant, and evaluation observability.
//!
//! Expressions are single-threaded values. Nothing in this crate spawns,
//! locks, or suspends; `result()` runs to completion on the calling thread.

#![warn(unreachable_pub)]

pub mod eager;
pub mod error;
pub mod lazy;
pub mod obs;
pub mod predicate;

// test
#[cfg(test)]
pub(crate) mod test_support;

pub use error::ExprError;

///
/// Prelude
///
/// Prelude contains only expression vocabulary.
/// Free functions (`expr`, `all_of`, ...) stay namespaced under `lazy` and
/// `eager` because both flavours share their names.
///

pub mod prelude {
    pub use crate::{
        eager::EagerExpr,
        lazy::LazyExpr,
        predicate::{DeferredPredicate, Predicate},
    };
}
