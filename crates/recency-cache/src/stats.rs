//! Cache statistics tracking

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters describing how an LRU cache has been used
#[derive(Debug, Default)]
pub struct CacheStats {
    /// Lookups that found their key
    hits: AtomicU64,
    /// Lookups that did not find their key
    misses: AtomicU64,
    /// New keys inserted
    insertions: AtomicU64,
    /// Existing keys overwritten in place
    updates: AtomicU64,
    /// Entries displaced by capacity pressure or `remove_oldest`
    evictions: AtomicU64,
    /// Entries removed by key
    removals: AtomicU64,
    /// Current number of entries
    entry_count: AtomicU64,
}

impl CacheStats {
    /// Create new cache statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a cache hit
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a cache miss
    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Record insertion of a new key
    pub fn record_insertion(&self) {
        self.insertions.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an in-place update
    pub fn record_update(&self) {
        self.updates.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an eviction
    pub fn record_eviction(&self) {
        self.evictions.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a keyed removal
    pub fn record_removal(&self) {
        self.removals.fetch_add(1, Ordering::Relaxed);
    }

    /// Update entry count
    pub fn set_entry_count(&self, count: u64) {
        self.entry_count.store(count, Ordering::Relaxed);
    }

    /// Get hit count
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Get miss count
    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    /// Get insertion count
    pub fn insertions(&self) -> u64 {
        self.insertions.load(Ordering::Relaxed)
    }

    /// Get update count
    pub fn updates(&self) -> u64 {
        self.updates.load(Ordering::Relaxed)
    }

    /// Get eviction count
    pub fn evictions(&self) -> u64 {
        self.evictions.load(Ordering::Relaxed)
    }

    /// Get removal count
    pub fn removals(&self) -> u64 {
        self.removals.load(Ordering::Relaxed)
    }

    /// Get current entry count
    pub fn entry_count(&self) -> u64 {
        self.entry_count.load(Ordering::Relaxed)
    }

    /// Calculate hit rate (0.0 to 1.0)
    pub fn hit_rate(&self) -> f64 {
        let hits = self.hits() as f64;
        let total = hits + self.misses() as f64;
        if total == 0.0 {
            0.0
        } else {
            hits / total
        }
    }

    /// Get total requests (hits + misses)
    pub fn total_requests(&self) -> u64 {
        self.hits() + self.misses()
    }

    /// Reset all counters except the entry count
    pub fn reset(&self) {
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
        self.insertions.store(0, Ordering::Relaxed);
        self.updates.store(0, Ordering::Relaxed);
        self.evictions.store(0, Ordering::Relaxed);
        self.removals.store(0, Ordering::Relaxed);
    }
}

impl Clone for CacheStats {
    fn clone(&self) -> Self {
        Self {
            hits: AtomicU64::new(self.hits()),
            misses: AtomicU64::new(self.misses()),
            insertions: AtomicU64::new(self.insertions()),
            updates: AtomicU64::new(self.updates()),
            evictions: AtomicU64::new(self.evictions()),
            removals: AtomicU64::new(self.removals()),
            entry_count: AtomicU64::new(self.entry_count()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_recording() {
        let stats = CacheStats::new();

        stats.record_hit();
        stats.record_hit();
        stats.record_miss();
        stats.record_insertion();
        stats.record_update();

        assert_eq!(stats.hits(), 2);
        assert_eq!(stats.misses(), 1);
        assert_eq!(stats.total_requests(), 3);
        assert_eq!(stats.insertions(), 1);
        assert_eq!(stats.updates(), 1);
    }

    #[test]
    fn test_hit_rate() {
        let stats = CacheStats::new();

        // Empty stats should return 0.0
        assert_eq!(stats.hit_rate(), 0.0);

        // 2 hits, 2 misses = 50% hit rate
        stats.record_hit();
        stats.record_hit();
        stats.record_miss();
        stats.record_miss();

        assert!((stats.hit_rate() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_reset_keeps_entry_count() {
        let stats = CacheStats::new();
        stats.record_hit();
        stats.record_eviction();
        stats.record_removal();
        stats.set_entry_count(7);

        stats.reset();

        assert_eq!(stats.hits(), 0);
        assert_eq!(stats.evictions(), 0);
        assert_eq!(stats.removals(), 0);
        assert_eq!(stats.entry_count(), 7);
    }

    #[test]
    fn test_clone() {
        let stats = CacheStats::new();
        stats.record_hit();
        stats.record_eviction();

        let cloned = stats.clone();
        stats.record_hit();

        assert_eq!(cloned.hits(), 1);
        assert_eq!(cloned.evictions(), 1);
        assert_eq!(stats.hits(), 2);
    }
}
