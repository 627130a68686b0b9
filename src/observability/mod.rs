//! Observability module for monitoring and metrics.
//!
//! This module provides lookup counters, catalog load tracking and
//! operation timers, all reported through `tracing`.

pub mod metrics;

pub use metrics::{MetricsTracker, Timer};
