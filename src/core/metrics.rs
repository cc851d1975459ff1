//! Logger metrics for observability
//!
//! Counters for records delivered to the sinks, records accepted by the delivery
//! queue, and records discarded because they arrived after shutdown began.

use std::sync::atomic::{AtomicU64, Ordering};

/// Delivery counters shared by a logger, its router and its queue
///
/// # Example
///
/// ```
/// use rust_sink_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
/// metrics.record_enqueued();
/// metrics.record_delivered();
///
/// assert_eq!(metrics.enqueued_count(), 1);
/// assert_eq!(metrics.delivered_count(), 1);
/// assert_eq!(metrics.dropped_count(), 0);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Records written to every sink of the output mode
    delivered_count: AtomicU64,

    /// Records accepted by the delivery queue
    enqueued_count: AtomicU64,

    /// Records discarded because the queue was shutting down or stopped
    dropped_count: AtomicU64,
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            delivered_count: AtomicU64::new(0),
            enqueued_count: AtomicU64::new(0),
            dropped_count: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn delivered_count(&self) -> u64 {
        self.delivered_count.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn enqueued_count(&self) -> u64 {
        self.enqueued_count.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn dropped_count(&self) -> u64 {
        self.dropped_count.load(Ordering::Relaxed)
    }

    /// Returns the previous value
    #[inline]
    pub fn record_delivered(&self) -> u64 {
        self.delivered_count.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_enqueued(&self) -> u64 {
        self.enqueued_count.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_dropped(&self) -> u64 {
        self.dropped_count.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            delivered_count: AtomicU64::new(self.delivered_count()),
            enqueued_count: AtomicU64::new(self.enqueued_count()),
            dropped_count: AtomicU64::new(self.dropped_count()),
        }
    }
}
