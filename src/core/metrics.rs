//! Logger metrics for observability
//!
//! Counters describing where entries ended up. One instance is shared by a
//! logger and every logger derived from it.

use std::sync::atomic::{AtomicU64, Ordering};

/// Outcome counters for the emission pipeline
///
/// # Example
///
/// ```
/// use logharbour::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
/// metrics.record_written();
/// metrics.record_filtered();
///
/// assert_eq!(metrics.written(), 1);
/// assert_eq!(metrics.filtered(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Entries written to the primary sink
    written: AtomicU64,

    /// Entries dropped by the priority filter
    filtered: AtomicU64,

    /// Entries rejected by the validator
    invalid: AtomicU64,

    /// Invalid entries written to a fallback sink
    fallback_written: AtomicU64,

    /// Valid entries the sink failed to write
    write_failures: AtomicU64,

    /// Entries handed to the diagnostic stream
    diagnostics: AtomicU64,
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            written: AtomicU64::new(0),
            filtered: AtomicU64::new(0),
            invalid: AtomicU64::new(0),
            fallback_written: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
            diagnostics: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn written(&self) -> u64 {
        self.written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn filtered(&self) -> u64 {
        self.filtered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn invalid(&self) -> u64 {
        self.invalid.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn fallback_written(&self) -> u64 {
        self.fallback_written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn diagnostics(&self) -> u64 {
        self.diagnostics.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_written(&self) -> u64 {
        self.written.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_filtered(&self) -> u64 {
        self.filtered.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_invalid(&self) -> u64 {
        self.invalid.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_fallback_written(&self) -> u64 {
        self.fallback_written.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_write_failure(&self) -> u64 {
        self.write_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_diagnostic(&self) -> u64 {
        self.diagnostics.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Snapshot of the current values
    fn clone(&self) -> Self {
        Self {
            written: AtomicU64::new(self.written()),
            filtered: AtomicU64::new(self.filtered()),
            invalid: AtomicU64::new(self.invalid()),
            fallback_written: AtomicU64::new(self.fallback_written()),
            write_failures: AtomicU64::new(self.write_failures()),
            diagnostics: AtomicU64::new(self.diagnostics()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_new() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.written(), 0);
        assert_eq!(metrics.filtered(), 0);
        assert_eq!(metrics.invalid(), 0);
        assert_eq!(metrics.fallback_written(), 0);
        assert_eq!(metrics.write_failures(), 0);
        assert_eq!(metrics.diagnostics(), 0);
    }

    #[test]
    fn test_record_returns_previous_value() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.record_invalid(), 0);
        assert_eq!(metrics.record_invalid(), 1);
        assert_eq!(metrics.invalid(), 2);
    }

    #[test]
    fn test_clone_is_snapshot() {
        let metrics = LoggerMetrics::new();
        metrics.record_written();
        metrics.record_diagnostic();

        let snapshot = metrics.clone();
        metrics.record_written();

        assert_eq!(metrics.written(), 2);
        assert_eq!(snapshot.written(), 1);
        assert_eq!(snapshot.diagnostics(), 1);
    }
}
