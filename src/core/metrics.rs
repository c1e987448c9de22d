//! Logger metrics for observability
//!
//! Counts events handed to appenders and appends that failed, so a host can
//! notice a broken sink without logging ever failing on its behalf.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics shared by every logger of one registry
///
/// # Example
///
/// ```
/// use rust_logger_hierarchy::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_dispatched();
/// metrics.record_failed_append();
///
/// assert_eq!(metrics.dispatched_count(), 1);
/// assert_eq!(metrics.failed_append_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct LoggerMetrics {
    /// Events that passed the level gate and were dispatched
    dispatched: AtomicU64,

    /// Successful `do_append` calls
    appended: AtomicU64,

    /// `do_append` calls that returned an error
    failed_appends: AtomicU64,
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            dispatched: AtomicU64::new(0),
            appended: AtomicU64::new(0),
            failed_appends: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn dispatched_count(&self) -> u64 {
        self.dispatched.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn appended_count(&self) -> u64 {
        self.appended.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn failed_append_count(&self) -> u64 {
        self.failed_appends.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_dispatched(&self) -> u64 {
        self.dispatched.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_appended(&self) -> u64 {
        self.appended.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_failed_append(&self) -> u64 {
        self.failed_appends.fetch_add(1, Ordering::Relaxed)
    }

    /// Failed appends as a percentage of all appends (0.0 - 100.0)
    ///
    /// Returns 0.0 if nothing has been appended yet.
    pub fn failure_rate(&self) -> f64 {
        let failed = self.failed_append_count();
        let total = failed + self.appended_count();
        if total == 0 {
            0.0
        } else {
            (failed as f64 / total as f64) * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_metrics_are_zero() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.dispatched_count(), 0);
        assert_eq!(metrics.appended_count(), 0);
        assert_eq!(metrics.failed_append_count(), 0);
        assert_eq!(metrics.failure_rate(), 0.0);
    }

    #[test]
    fn test_failure_rate() {
        let metrics = LoggerMetrics::new();
        for _ in 0..90 {
            metrics.record_appended();
        }
        for _ in 0..10 {
            metrics.record_failed_append();
        }

        let rate = metrics.failure_rate();
        assert!((9.9..=10.1).contains(&rate), "Failure rate was {}", rate);
    }
}
