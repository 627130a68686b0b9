//! Lookup and catalog metrics.
//!
//! Counters are plain atomics shared through `Arc`, so a tracker can be cloned
//! into every service without coordination.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Metrics tracker for the application.
#[derive(Debug, Clone)]
pub struct MetricsTracker {
    lookups_total: Arc<AtomicU64>,
    empty_results_total: Arc<AtomicU64>,
    catalog_loads_total: Arc<AtomicU64>,
    catalog_load_failures_total: Arc<AtomicU64>,
}

impl MetricsTracker {
    /// Create a new metrics tracker.
    pub fn new() -> Self {
        Self {
            lookups_total: Arc::new(AtomicU64::new(0)),
            empty_results_total: Arc::new(AtomicU64::new(0)),
            catalog_loads_total: Arc::new(AtomicU64::new(0)),
            catalog_load_failures_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Track a completed lookup.
    pub fn track_lookup(&self, duration_ms: u128, result_count: usize) {
        self.lookups_total.fetch_add(1, Ordering::Relaxed);

        if result_count == 0 {
            self.empty_results_total.fetch_add(1, Ordering::Relaxed);
        }

        tracing::info!(
            duration_ms = duration_ms,
            result_count = result_count,
            "Lookup completed"
        );
    }

    /// Track a catalog load attempt.
    pub fn track_catalog_load(&self, success: bool) {
        self.catalog_loads_total.fetch_add(1, Ordering::Relaxed);

        if !success {
            self.catalog_load_failures_total
                .fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Get the total number of lookups.
    pub fn lookups_total(&self) -> u64 {
        self.lookups_total.load(Ordering::Relaxed)
    }

    /// Get the number of lookups that found nothing.
    pub fn empty_results_total(&self) -> u64 {
        self.empty_results_total.load(Ordering::Relaxed)
    }

    /// Get the total number of catalog load attempts.
    pub fn catalog_loads_total(&self) -> u64 {
        self.catalog_loads_total.load(Ordering::Relaxed)
    }

    /// Get the number of failed catalog loads.
    pub fn catalog_load_failures_total(&self) -> u64 {
        self.catalog_load_failures_total.load(Ordering::Relaxed)
    }

    /// Share of lookups with no result (0.0 to 1.0).
    pub fn empty_result_rate(&self) -> f64 {
        let empty = self.empty_results_total() as f64;
        let total = self.lookups_total() as f64;

        if total == 0.0 {
            0.0
        } else {
            empty / total
        }
    }

    /// Print a summary of all metrics.
    pub fn summary(&self) -> String {
        format!(
            "Metrics Summary:\n\
             Lookups: {}\n\
             Empty Results: {} ({:.2}% of lookups)\n\
             Catalog Loads: {}\n\
             Catalog Load Failures: {}",
            self.lookups_total(),
            self.empty_results_total(),
            self.empty_result_rate() * 100.0,
            self.catalog_loads_total(),
            self.catalog_load_failures_total(),
        )
    }
}

impl Default for MetricsTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// A timer for tracking operation duration.
pub struct Timer {
    start: Instant,
    operation: String,
}

impl Timer {
    /// Start a new timer for the given operation.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            start: Instant::now(),
            operation: operation.into(),
        }
    }

    /// Finish the timer and return the elapsed time in milliseconds.
    pub fn finish(self) -> u128 {
        let duration_ms = self.start.elapsed().as_millis();

        tracing::debug!(
            operation = %self.operation,
            duration_ms = duration_ms,
            "Operation completed"
        );

        duration_ms
    }

    /// Finish the timer with a specific status.
    pub fn finish_with_status(self, success: bool) -> u128 {
        let duration_ms = self.start.elapsed().as_millis();

        if success {
            tracing::debug!(
                operation = %self.operation,
                duration_ms = duration_ms,
                "Operation succeeded"
            );
        } else {
            tracing::warn!(
                operation = %self.operation,
                duration_ms = duration_ms,
                "Operation failed"
            );
        }

        duration_ms
    }
}
