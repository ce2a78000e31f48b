//! Fixed-capacity, thread-safe LRU cache
//!
//! This crate provides a least-recently-used cache that keeps at most a fixed
//! number of entries and evicts the entry accessed longest ago when a new one
//! would exceed that bound.
//!
//! # Features
//!
//! - **O(1) Operations**: Lookup, promotion and eviction are constant time
//! - **Thread-Safe**: Every operation runs atomically under one `parking_lot::Mutex`
//! - **Eviction Notification**: An [`EvictionListener`] sees every displaced entry
//! - **Statistics**: Track hits, misses, insertions, updates, evictions and removals
//!
//! # Example
//!
//! ```
//! use recency_cache::LruCache;
//! use std::sync::{Arc, Mutex};
//!
//! let evicted = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&evicted);
//! let cache = LruCache::new(1, move |key: &String, value: &String| {
//!     sink.lock().unwrap().push((key.clone(), value.clone()));
//! })?;
//!
//! cache.set("a".to_string(), "foo".to_string());
//! cache.set("b".to_string(), "bar".to_string());
//!
//! assert_eq!(evicted.lock().unwrap()[0], ("a".to_string(), "foo".to_string()));
//! assert_eq!(cache.get(&"a".to_string()), None);
//! assert_eq!(cache.get(&"b".to_string()), Some("bar".to_string()));
//! # Ok::<(), recency_cache::CacheError>(())
//! ```

pub mod cache;
mod list;
pub mod listener;
pub mod stats;

pub use cache::LruCache;
pub use listener::{noop, EvictionListener, NoopListener};
pub use recency_core::{CacheConfig, CacheError, Result};
pub use stats::CacheStats;
