//! Observability for the validation service.
//!
//! Counters are kept in memory and reported through `tracing`.

pub mod metrics;

pub use metrics::{MetricsSummary, ValidationMetrics};
