//! Counters for one broadcast run.

use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Instant;

/// Metrics collector for a broadcast.
#[derive(Debug, Clone)]
pub struct BroadcastMetrics {
    inner: Arc<BroadcastMetricsInner>,
}

#[derive(Debug)]
struct BroadcastMetricsInner {
    generations: AtomicU64,
    fallbacks: AtomicU64,
    deliveries: AtomicU64,
    delivery_failures: AtomicU64,
    sleeps: AtomicU64,
    stopped_early: AtomicBool,
    last_delivered: parking_lot::Mutex<Option<Instant>>,
}

impl Default for BroadcastMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl BroadcastMetrics {
    /// Creates a new metrics collector.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(BroadcastMetricsInner {
                generations: AtomicU64::new(0),
                fallbacks: AtomicU64::new(0),
                deliveries: AtomicU64::new(0),
                delivery_failures: AtomicU64::new(0),
                sleeps: AtomicU64::new(0),
                stopped_early: AtomicBool::new(false),
                last_delivered: parking_lot::Mutex::new(None),
            }),
        }
    }

    /// Records a generation attempt.
    pub fn record_generation(&self, fallback: bool) {
        self.inner.generations.fetch_add(1, Ordering::Relaxed);
        if fallback {
            self.inner.fallbacks.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Records a delivery attempt and its outcome.
    pub fn record_delivery(&self, delivered: bool) {
        self.inner.deliveries.fetch_add(1, Ordering::Relaxed);
        if delivered {
            *self.inner.last_delivered.lock() = Some(Instant::now());
        } else {
            self.inner.delivery_failures.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Records a pause between rounds.
    pub fn record_sleep(&self) {
        self.inner.sleeps.fetch_add(1, Ordering::Relaxed);
    }

    /// Records that the opening delivery failed and the run ended.
    pub fn record_stopped_early(&self) {
        self.inner.stopped_early.store(true, Ordering::Relaxed);
    }

    /// Zeroes every counter and forgets the last delivery.
    pub fn reset(&self) {
        self.inner.generations.store(0, Ordering::Relaxed);
        self.inner.fallbacks.store(0, Ordering::Relaxed);
        self.inner.deliveries.store(0, Ordering::Relaxed);
        self.inner.delivery_failures.store(0, Ordering::Relaxed);
        self.inner.sleeps.store(0, Ordering::Relaxed);
        self.inner.stopped_early.store(false, Ordering::Relaxed);
        *self.inner.last_delivered.lock() = None;
    }

    /// When a segment was last accepted by the sink.
    pub fn last_delivered(&self) -> Option<Instant> {
        *self.inner.last_delivered.lock()
    }

    /// Point-in-time copy of the counters.
    pub fn snapshot(&self) -> BroadcastReport {
        BroadcastReport {
            generations: self.inner.generations.load(Ordering::Relaxed),
            fallbacks: self.inner.fallbacks.load(Ordering::Relaxed),
            deliveries: self.inner.deliveries.load(Ordering::Relaxed),
            delivery_failures: self.inner.delivery_failures.load(Ordering::Relaxed),
            sleeps: self.inner.sleeps.load(Ordering::Relaxed),
            stopped_early: self.inner.stopped_early.load(Ordering::Relaxed),
        }
    }
}

/// Summary of a finished (or in-progress) broadcast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BroadcastReport {
    /// Generation attempts, fallbacks included
    pub generations: u64,
    /// Generations that ended in a fallback segment
    pub fallbacks: u64,
    /// Delivery attempts
    pub deliveries: u64,
    /// Delivery attempts that were not accepted
    pub delivery_failures: u64,
    /// Pauses taken between rounds
    pub sleeps: u64,
    /// The opening delivery failed, so no continuation rounds ran
    pub stopped_early: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_accumulate() {
        let metrics = BroadcastMetrics::new();
        metrics.record_generation(false);
        metrics.record_generation(true);
        metrics.record_delivery(true);
        metrics.record_delivery(false);
        metrics.record_sleep();

        let report = metrics.snapshot();
        assert_eq!(report.generations, 2);
        assert_eq!(report.fallbacks, 1);
        assert_eq!(report.deliveries, 2);
        assert_eq!(report.delivery_failures, 1);
        assert_eq!(report.sleeps, 1);
        assert!(!report.stopped_early);
        assert!(metrics.last_delivered().is_some());
    }

    #[test]
    fn test_clones_share_counters() {
        let metrics = BroadcastMetrics::new();
        let clone = metrics.clone();
        clone.record_stopped_early();
        assert!(metrics.snapshot().stopped_early);
    }

    #[test]
    fn test_reset_clears_everything() {
        let metrics = BroadcastMetrics::new();
        metrics.record_generation(true);
        metrics.record_delivery(true);
        metrics.record_delivery(false);
        metrics.record_sleep();
        metrics.record_stopped_early();

        metrics.reset();

        let report = metrics.snapshot();
        assert_eq!(report.generations, 0);
        assert_eq!(report.fallbacks, 0);
        assert_eq!(report.deliveries, 0);
        assert_eq!(report.delivery_failures, 0);
        assert_eq!(report.sleeps, 0);
        assert!(!report.stopped_early);
        assert!(metrics.last_delivered().is_none());
    }
}
