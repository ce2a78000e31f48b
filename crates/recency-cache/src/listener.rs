//! Eviction notification
//!
//! A listener is told about every entry that leaves the cache because of
//! capacity pressure or an explicit `remove_oldest`. Keyed removal, in-place
//! updates and `clear` do not notify.
//!
//! Listeners run synchronously on the calling thread while the cache lock is
//! held. A listener must not call back into the cache that invoked it (the
//! lock is not reentrant, so doing so deadlocks) and should hand long-running
//! work off elsewhere.

/// Receives entries evicted from an LRU cache
pub trait EvictionListener<K, V>: Send + Sync {
    /// Called once per evicted entry, after it has been unlinked
    fn on_evict(&self, key: &K, value: &V);
}

impl<K, V, F> EvictionListener<K, V> for F
where
    F: Fn(&K, &V) + Send + Sync,
{
    fn on_evict(&self, key: &K, value: &V) {
        self(key, value)
    }
}

/// A listener that ignores evictions
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopListener;

impl<K, V> EvictionListener<K, V> for NoopListener {
    fn on_evict(&self, _key: &K, _value: &V) {
        // No-op
    }
}

/// Shorthand for [`NoopListener`]
pub fn noop() -> NoopListener {
    NoopListener
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[test]
    fn test_closure_listener() {
        let seen = Mutex::new(Vec::new());
        let listener = |key: &u32, value: &i32| seen.lock().push((*key, *value));

        EvictionListener::<u32, i32>::on_evict(&listener, &1, &10);
        EvictionListener::<u32, i32>::on_evict(&listener, &2, &20);

        assert_eq!(*seen.lock(), vec![(1, 10), (2, 20)]);
    }

    #[test]
    fn test_noop_listener() {
        let listener = noop();
        EvictionListener::<u32, i32>::on_evict(&listener, &1, &10); // Should not panic
    }
}
