// src/crawl/stats.rs
// =============================================================================
// Running counters for a crawl:
// - found:     URLs admitted into the frontier (starts at 1 for the seed)
// - processed: URLs whose fetch attempt finished, success or failure
// - errors:    fetch failures
//
// Workers bump these with atomic adds. Reads are plain loads, so a value read
// while other workers are running may already be stale. That is fine for the
// soft cap (see coordinator.rs) and for progress output.
// =============================================================================

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

#[derive(Debug)]
pub struct CrawlStats {
    found: AtomicUsize,
    processed: AtomicUsize,
    errors: AtomicUsize,
}

impl CrawlStats {
    /// Counters for a fresh crawl: the seed is already "found".
    pub fn new() -> Self {
        Self {
            found: AtomicUsize::new(1),
            processed: AtomicUsize::new(0),
            errors: AtomicUsize::new(0),
        }
    }

    pub fn record_found(&self) {
        self.found.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_processed(&self) {
        self.processed.fetch_add(1, Ordering::AcqRel);
    }

    pub fn record_error(&self) {
        self.errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn processed(&self) -> usize {
        self.processed.load(Ordering::Acquire)
    }

    /// Point-in-time copy of all counters.
    pub fn snapshot(&self, elapsed: Duration) -> StatsSnapshot {
        StatsSnapshot {
            found: self.found.load(Ordering::Relaxed),
            processed: self.processed.load(Ordering::Acquire),
            errors: self.errors.load(Ordering::Relaxed),
            elapsed,
        }
    }
}

impl Default for CrawlStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Final numbers of a crawl, used for the summary block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub found: usize,
    pub processed: usize,
    pub errors: usize,
    pub elapsed: Duration,
}
