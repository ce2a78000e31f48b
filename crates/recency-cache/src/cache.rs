//! Thread-safe LRU cache implementation

use crate::list::RecencyList;
use crate::listener::{EvictionListener, NoopListener};
use crate::stats::CacheStats;
use ahash::AHashMap;
use parking_lot::Mutex;
use recency_core::{CacheConfig, CacheError, Result};
use std::hash::Hash;
use std::num::NonZeroUsize;
use std::sync::Arc;
use tracing::{debug, trace};

/// Upper bound on slots reserved at construction; larger caches grow on demand
const MAX_PREALLOC: usize = 1024;

/// Recency list plus the key -> slot index over it
struct Inner<K, V> {
    list: RecencyList<K, V>,
    index: AHashMap<K, usize>,
}

impl<K: Hash + Eq, V> Inner<K, V> {
    fn with_capacity(capacity: usize) -> Self {
        let reserved = capacity.min(MAX_PREALLOC);
        Self {
            list: RecencyList::with_capacity(reserved),
            index: AHashMap::with_capacity(reserved + 1),
        }
    }

    fn pop_oldest(&mut self) -> Option<(K, V)> {
        let (key, value) = self.list.pop_back()?;
        self.index.remove(&key);
        Some((key, value))
    }
}

/// Fixed-capacity least-recently-used cache, safe for concurrent use.
///
/// Every operation holds a single lock for its whole duration, so each call
/// is atomic with respect to every other call. Reads count as uses: `get`
/// promotes the entry it finds, which is why the lock is a `Mutex` and not a
/// reader-writer lock.
///
/// The [`EvictionListener`] runs on the calling thread while that lock is
/// held. It must not call back into the same cache, or it will deadlock.
pub struct LruCache<K, V> {
    inner: Mutex<Inner<K, V>>,
    capacity: NonZeroUsize,
    listener: Box<dyn EvictionListener<K, V>>,
    stats: Arc<CacheStats>,
    stats_enabled: bool,
    name: String,
}

impl<K, V> LruCache<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Create a cache holding at most `capacity` entries.
    ///
    /// Returns [`CacheError::InvalidCapacity`] when `capacity` is zero.
    pub fn new<L>(capacity: usize, listener: L) -> Result<Self>
    where
        L: EvictionListener<K, V> + 'static,
    {
        let capacity = NonZeroUsize::new(capacity).ok_or(CacheError::InvalidCapacity(capacity))?;
        Ok(Self::with_capacity(capacity, listener))
    }

    /// Create a cache from an already validated capacity
    pub fn with_capacity<L>(capacity: NonZeroUsize, listener: L) -> Self
    where
        L: EvictionListener<K, V> + 'static,
    {
        let defaults = CacheConfig::default();
        Self::build(capacity, listener, defaults.name, defaults.stats_enabled)
    }

    /// Create a cache that does not report evictions
    pub fn without_listener(capacity: usize) -> Result<Self> {
        Self::new(capacity, NoopListener)
    }

    /// Create a cache from configuration
    pub fn from_config<L>(config: &CacheConfig, listener: L) -> Result<Self>
    where
        L: EvictionListener<K, V> + 'static,
    {
        let capacity = config.capacity()?;
        Ok(Self::build(
            capacity,
            listener,
            config.name.clone(),
            config.stats_enabled,
        ))
    }

    fn build<L>(capacity: NonZeroUsize, listener: L, name: String, stats_enabled: bool) -> Self
    where
        L: EvictionListener<K, V> + 'static,
    {
        debug!(cache = %name, capacity = capacity.get(), "created LRU cache");
        Self {
            inner: Mutex::new(Inner::with_capacity(capacity.get())),
            capacity,
            listener: Box::new(listener),
            stats: Arc::new(CacheStats::new()),
            stats_enabled,
            name,
        }
    }

    /// Insert or update an entry, making it the most recently used.
    ///
    /// Updating an existing key replaces its value without notifying the
    /// listener. Inserting a new key into a full cache evicts the least
    /// recently used entry and hands it to the listener.
    pub fn set(&self, key: K, value: V) {
        let mut inner = self.inner.lock();

        if let Some(&slot) = inner.index.get(&key) {
            if let Some(existing) = inner.list.value_mut(slot) {
                *existing = value;
            }
            inner.list.move_to_front(slot);
            self.record(|stats| stats.record_update());
            return;
        }

        let slot = inner.list.push_front(key.clone(), value);
        inner.index.insert(key, slot);
        self.record(|stats| stats.record_insertion());

        // one insert can exceed capacity by at most one entry
        if inner.list.len() > self.capacity.get() {
            if let Some((key, value)) = inner.pop_oldest() {
                self.notify_eviction(inner.list.len(), &key, &value);
            }
        }

        let len = inner.list.len();
        self.record(|stats| stats.set_entry_count(len as u64));
    }

    /// Remove an entry by key and return its value.
    ///
    /// This is not an eviction: the listener is not called.
    pub fn remove(&self, key: &K) -> Option<V> {
        let mut inner = self.inner.lock();
        let slot = inner.index.remove(key)?;
        let (_, value) = inner.list.remove(slot)?;

        let len = inner.list.len();
        self.record(|stats| {
            stats.record_removal();
            stats.set_entry_count(len as u64);
        });
        Some(value)
    }

    /// Evict the least recently used entry, notifying the listener.
    ///
    /// Returns `None` when the cache is empty.
    pub fn remove_oldest(&self) -> Option<(K, V)> {
        let mut inner = self.inner.lock();
        let (key, value) = inner.pop_oldest()?;

        self.notify_eviction(inner.list.len(), &key, &value);
        Some((key, value))
    }

    /// Snapshot of all keys, most recently used first
    pub fn keys(&self) -> Vec<K> {
        let inner = self.inner.lock();
        inner.list.iter().map(|(_, key, _)| key.clone()).collect()
    }

    /// Check for a key without affecting recency
    pub fn contains(&self, key: &K) -> bool {
        self.inner.lock().index.contains_key(key)
    }

    /// Drop every entry without notifying the listener.
    ///
    /// Returns the number of entries dropped.
    pub fn clear(&self) -> usize {
        let dropped = {
            let mut inner = self.inner.lock();
            let dropped = inner.list.len();
            inner.list.clear();
            inner.index.clear();
            self.record(|stats| stats.set_entry_count(0));
            dropped
        };

        debug!(cache = %self.name, dropped, "cleared LRU cache");
        dropped
    }

    /// Get current number of entries
    pub fn len(&self) -> usize {
        self.inner.lock().list.len()
    }

    /// Check if cache is empty
    pub fn is_empty(&self) -> bool {
        self.inner.lock().list.is_empty()
    }

    /// Maximum number of entries
    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    /// Name used in log events
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get cache statistics
    pub fn stats(&self) -> Arc<CacheStats> {
        Arc::clone(&self.stats)
    }

    /// Verify that the index and the recency list describe the same entries.
    ///
    /// Every indexed key must resolve to a linked node carrying that key,
    /// every linked node must be indexed, and the length must be within
    /// capacity.
    #[doc(hidden)]
    pub fn check_invariants(&self) -> bool {
        let inner = self.inner.lock();
        if !inner.list.is_consistent()
            || inner.index.len() != inner.list.len()
            || inner.list.len() > self.capacity.get()
        {
            return false;
        }
        inner
            .list
            .iter()
            .all(|(slot, key, _)| inner.index.get(key) == Some(&slot))
    }

    fn notify_eviction(&self, remaining: usize, key: &K, value: &V) {
        trace!(cache = %self.name, remaining, "evicted least recently used entry");
        self.record(|stats| {
            stats.record_eviction();
            stats.set_entry_count(remaining as u64);
        });
        self.listener.on_evict(key, value);
    }

    fn record(&self, update: impl FnOnce(&CacheStats)) {
        if self.stats_enabled {
            update(&self.stats);
        }
    }
}

impl<K, V> LruCache<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    /// Look up a value, making its entry the most recently used
    pub fn get(&self, key: &K) -> Option<V> {
        let mut inner = self.inner.lock();
        let Some(&slot) = inner.index.get(key) else {
            self.record(|stats| stats.record_miss());
            return None;
        };

        inner.list.move_to_front(slot);
        let value = inner.list.value(slot).cloned();
        self.record(|stats| stats.record_hit());
        value
    }

    /// Look up a value without affecting recency
    pub fn peek(&self, key: &K) -> Option<V> {
        let inner = self.inner.lock();
        let slot = *inner.index.get(key)?;
        inner.list.value(slot).cloned()
    }
}

impl<K, V> std::fmt::Debug for LruCache<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LruCache")
            .field("name", &self.name)
            .field("capacity", &self.capacity)
            .field("current_entries", &self.inner.lock().list.len())
            .field("stats_enabled", &self.stats_enabled)
            .finish()
    }
}
