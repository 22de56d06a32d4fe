//! Observability: evaluation counters and the sink boundary.
//!
//! Nothing in here invokes a predicate or changes an evaluation result.
//! The predicate algebra only ever talks to `sink::record`.

pub(crate) mod metrics;
pub(crate) mod sink;

// re-exports
pub use metrics::EvalReport;
pub use sink::{EvalEvent, EvalSink, eval_report, eval_reset, with_eval_sink};
