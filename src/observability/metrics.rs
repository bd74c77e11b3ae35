//! Request counters for the validation service.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Shared counters for the line service. Cheap to clone; clones share counts.
#[derive(Debug, Clone, Default)]
pub struct ValidationMetrics {
    requests_total: Arc<AtomicU64>,
    rejections_total: Arc<AtomicU64>,
    rate_limited_total: Arc<AtomicU64>,
    malformed_total: Arc<AtomicU64>,
}

impl ValidationMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a handled request and whether its input was accepted.
    pub fn track_request(&self, op: &str, accepted: bool) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);

        if !accepted {
            self.rejections_total.fetch_add(1, Ordering::Relaxed);
        }

        tracing::debug!(op = %op, accepted = accepted, "Request handled");
    }

    /// Track a submission refused by a cooldown.
    pub fn track_rate_limited(&self, op: &str, retry_after_secs: u64) {
        self.rate_limited_total.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(op = %op, retry_after_secs = retry_after_secs, "Request rate limited");
    }

    /// Track a line that could not be parsed as a request.
    pub fn track_malformed(&self) {
        self.malformed_total.fetch_add(1, Ordering::Relaxed);
        tracing::trace!("Malformed request line");
    }

    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            requests_total: self.requests_total.load(Ordering::Relaxed),
            rejections_total: self.rejections_total.load(Ordering::Relaxed),
            rate_limited_total: self.rate_limited_total.load(Ordering::Relaxed),
            malformed_total: self.malformed_total.load(Ordering::Relaxed),
        }
    }

    /// Log the current counters at info level.
    pub fn log_summary(&self) {
        let s = self.summary();
        tracing::info!(
            requests_total = s.requests_total,
            rejections_total = s.rejections_total,
            rate_limited_total = s.rate_limited_total,
            malformed_total = s.malformed_total,
            "Validation metrics summary"
        );
    }
}

/// Point-in-time snapshot of [`ValidationMetrics`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricsSummary {
    pub requests_total: u64,
    pub rejections_total: u64,
    pub rate_limited_total: u64,
    pub malformed_total: u64,
}
