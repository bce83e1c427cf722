//! Ranked index statistics.
//!
//! Counters are updated from lookups that only hold `&self`, hence atomics.

use core::sync::atomic::{AtomicUsize, Ordering};

/// Statistics for a ranked index.
#[derive(Debug)]
pub struct RankStats {
    /// Comparator invocations.
    comparisons: AtomicUsize,
    /// Number of times the key array doubled.
    growths: AtomicUsize,
    /// Positions visited by tie-resolution scans.
    tie_steps: AtomicUsize,
}

impl RankStats {
    /// Creates a new empty stats instance.
    pub fn new() -> Self {
        Self {
            comparisons: AtomicUsize::new(0),
            growths: AtomicUsize::new(0),
            tie_steps: AtomicUsize::new(0),
        }
    }

    /// Returns the number of comparator invocations.
    pub fn comparisons(&self) -> usize {
        self.comparisons.load(Ordering::Relaxed)
    }

    /// Returns the number of growth events.
    pub fn growths(&self) -> usize {
        self.growths.load(Ordering::Relaxed)
    }

    /// Returns the number of tie-scan steps.
    pub fn tie_steps(&self) -> usize {
        self.tie_steps.load(Ordering::Relaxed)
    }

    pub(crate) fn record_comparison(&self) {
        self.comparisons.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_growth(&self) {
        self.growths.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_tie_step(&self) {
        self.tie_steps.fetch_add(1, Ordering::Relaxed);
    }

    /// Resets all counters to zero.
    pub fn reset(&self) {
        self.comparisons.store(0, Ordering::Relaxed);
        self.growths.store(0, Ordering::Relaxed);
        self.tie_steps.store(0, Ordering::Relaxed);
    }
}

impl Default for RankStats {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for RankStats {
    fn clone(&self) -> Self {
        Self {
            comparisons: AtomicUsize::new(self.comparisons()),
            growths: AtomicUsize::new(self.growths()),
            tie_steps: AtomicUsize::new(self.tie_steps()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = RankStats::new();
        assert_eq!(stats.comparisons(), 0);
        assert_eq!(stats.growths(), 0);
        assert_eq!(stats.tie_steps(), 0);
    }

    #[test]
    fn test_stats_record_and_reset() {
        let stats = RankStats::new();
        stats.record_comparison();
        stats.record_comparison();
        stats.record_growth();
        stats.record_tie_step();
        assert_eq!(stats.comparisons(), 2);
        assert_eq!(stats.growths(), 1);
        assert_eq!(stats.tie_steps(), 1);

        stats.reset();
        assert_eq!(stats.comparisons(), 0);
        assert_eq!(stats.growths(), 0);
    }

    #[test]
    fn test_stats_clone() {
        let stats = RankStats::new();
        stats.record_growth();
        let cloned = stats.clone();
        stats.record_growth();
        assert_eq!(cloned.growths(), 1);
        assert_eq!(stats.growths(), 2);
    }
}
