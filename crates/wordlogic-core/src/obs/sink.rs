//! Evaluation sink boundary.
//!
//! Predicate combinators MUST NOT touch obs::metrics directly.
//! All instrumentation flows through EvalEvent and EvalSink.
//!
//! This module is the only bridge between evaluation and the
//! thread-local counter state.
use crate::{
    obs::metrics::{self, EvalReport, bump},
    predicate::LogicOp,
};
use std::cell::RefCell;

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<*const dyn EvalSink>> = const { RefCell::new(None) };
}

///
/// EvalEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EvalEvent {
    /// `result()` was called on a lazy expression.
    ResultForced,

    /// A composed predicate produced a value.
    Combined { op: LogicOp },

    /// The right operand of an AND/OR was not invoked.
    ShortCircuit { op: LogicOp },
}

///
/// EvalSink
///

pub trait EvalSink {
    fn record(&self, event: EvalEvent);
}

/// GlobalEvalSink
/// Default sink that folds events into the thread-local counters.
/// Acts as the concrete sink when no scoped override is installed.

#[cfg_attr(not(feature = "metrics"), allow(dead_code))]
pub(crate) struct GlobalEvalSink;

impl EvalSink for GlobalEvalSink {
    fn record(&self, event: EvalEvent) {
        metrics::with_state_mut(|m| match event {
            EvalEvent::ResultForced => bump(&mut m.results_forced),

            EvalEvent::Combined { op } => match op {
                LogicOp::And => bump(&mut m.and_evaluations),
                LogicOp::Or => bump(&mut m.or_evaluations),
                LogicOp::Xor => bump(&mut m.xor_evaluations),
                LogicOp::Not => bump(&mut m.not_evaluations),
            },

            EvalEvent::ShortCircuit { op } => match op {
                LogicOp::And => bump(&mut m.and_short_circuits),
                LogicOp::Or => bump(&mut m.or_short_circuits),
                // XOR and NOT have no right operand to skip.
                LogicOp::Xor | LogicOp::Not => {}
            },
        });
    }
}

#[cfg_attr(not(feature = "metrics"), allow(dead_code))]
pub(crate) const GLOBAL_EVAL_SINK: GlobalEvalSink = GlobalEvalSink;

#[cfg(feature = "metrics")]
pub(crate) fn record(event: EvalEvent) {
    let override_ptr = SINK_OVERRIDE.with(|cell| *cell.borrow());
    if let Some(ptr) = override_ptr {
        // SAFETY:
        // - `ptr` is only present in SINK_OVERRIDE while the `with_eval_sink`
        //   call that installed it is still on this thread's stack, so the
        //   `&dyn EvalSink` it came from is live for the whole `record` call.
        // - The slot is copied out and its `RefCell` borrow released before
        //   dispatch. A sink that evaluates predicates (re-entering `record`)
        //   or installs its own nested override therefore never observes a
        //   held borrow, and nested overrides restore `ptr` before we return.
        // - Only `&self` is materialized, matching how the sink was lent.
        unsafe { (&*ptr).record(event) };
    } else {
        GLOBAL_EVAL_SINK.record(event);
    }
}

#[cfg(not(feature = "metrics"))]
pub(crate) const fn record(_event: EvalEvent) {}

/// Snapshot the evaluation counters for the current thread.
#[must_use]
pub fn eval_report() -> EvalReport {
    metrics::report()
}

/// Reset the evaluation counters for the current thread.
pub fn eval_reset() {
    metrics::reset();
}

/// Run a closure with a temporary evaluation sink override.
///
/// Events raised on this thread while `f` runs go to `sink` instead of the
/// global counters. Overrides nest; the previous sink is restored on exit.
///
/// Safe to call from outside the crate: `sink` is borrowed for the whole
/// call and the override is removed before this function returns or
/// unwinds, so no event can reach `sink` after the borrow ends. The override
/// slot is thread-local; other threads never dispatch to `sink`.
pub fn with_eval_sink<T>(sink: &dyn EvalSink, f: impl FnOnce() -> T) -> T {
    struct Guard(Option<*const dyn EvalSink>);

    impl Drop for Guard {
        fn drop(&mut self) {
            SINK_OVERRIDE.with(|cell| {
                *cell.borrow_mut() = self.0;
            });
        }
    }

    // SAFETY:
    // Erases the borrow lifetime so the pointer fits the thread-local slot.
    // The pointer never leaves this thread and is reachable only through
    // `record`, which runs synchronously inside predicate `test()` calls made
    // while `f` executes. `Guard` puts `prev` back on return and on unwind,
    // so the slot never outlives `sink`.
    let sink_ptr = unsafe { std::mem::transmute::<&dyn EvalSink, *const dyn EvalSink>(sink) };
    let prev = SINK_OVERRIDE.with(|cell| {
        let mut slot = cell.borrow_mut();
        slot.replace(sink_ptr)
    });
    let _guard = Guard(prev);

    f()
}

///
/// TESTS
///
