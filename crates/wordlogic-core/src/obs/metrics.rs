use serde::{Deserialize, Serialize};
use std::cell::RefCell;

///
/// EvalReport
/// Ephemeral, thread-local counters for lazy evaluation activity.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct EvalReport {
    // Entrypoints
    pub results_forced: u64,

    // Combinator evaluations
    pub and_evaluations: u64,
    pub or_evaluations: u64,
    pub xor_evaluations: u64,
    pub not_evaluations: u64,

    // Right operands skipped
    pub and_short_circuits: u64,
    pub or_short_circuits: u64,
}

impl EvalReport {
    /// Total combinator evaluations across all operators.
    #[must_use]
    pub const fn combinator_evaluations(&self) -> u64 {
        self.and_evaluations
            .saturating_add(self.or_evaluations)
            .saturating_add(self.xor_evaluations)
            .saturating_add(self.not_evaluations)
    }

    /// Total right operands that were never invoked.
    #[must_use]
    pub const fn short_circuits(&self) -> u64 {
        self.and_short_circuits
            .saturating_add(self.or_short_circuits)
    }
}

thread_local! {
    static EVAL_STATE: RefCell<EvalReport> = RefCell::new(EvalReport::default());
}

/// Borrow counters immutably.
pub(crate) fn with_state<R>(f: impl FnOnce(&EvalReport) -> R) -> R {
    EVAL_STATE.with(|m| f(&m.borrow()))
}

/// Borrow counters mutably.
pub(crate) fn with_state_mut<R>(f: impl FnOnce(&mut EvalReport) -> R) -> R {
    EVAL_STATE.with(|m| f(&mut m.borrow_mut()))
}

/// Snapshot the counters for the current thread.
pub(crate) fn report() -> EvalReport {
    with_state(|m| *m)
}

/// Reset all counters (useful in tests).
pub(crate) fn reset() {
    with_state_mut(|m| *m = EvalReport::default());
}

/// Saturating increment.
pub(crate) const fn bump(counter: &mut u64) {
    *counter = counter.saturating_add(1);
}
