//! LRU Cache Example
//!
//! Demonstrates eviction, promotion on read, and cache statistics.
//!
//! ```bash
//! cargo run --example lru_cache
//! RUST_LOG=recency_cache=trace cargo run --example lru_cache
//! ```

use anyhow::Result;
use recency_cache::LruCache;
use std::sync::{Arc, Mutex};
use tracing::info;

fn main() -> Result<()> {
    recency_demos::init_logging(false);

    println!("=== LRU Cache Example ===\n");

    // Example 1: Eviction notification
    eviction_callback()?;

    // Example 2: Reads promote entries
    promotion_on_read()?;

    // Example 3: Cache statistics
    cache_statistics()?;

    info!("all cache examples completed");
    println!("\n=== All cache examples completed! ===");
    Ok(())
}

/// Example 1: A capacity-1 cache reports the entry it displaces
fn eviction_callback() -> Result<()> {
    println!("--- Example 1: Eviction Callback ---\n");

    let evicted = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&evicted);
    let cache = LruCache::new(1, move |key: &String, value: &String| {
        println!("  evicted {} => {}", key, value);
        if let Ok(mut log) = sink.lock() {
            log.push(key.clone());
        }
    })?;

    cache.set("a".to_string(), "foo".to_string());
    cache.set("b".to_string(), "bar".to_string());

    println!("Lookup 'a': {:?}", cache.get(&"a".to_string()));
    println!("Lookup 'b': {:?}", cache.get(&"b".to_string()));

    // keyed removal hands the value back instead of notifying
    let removed = cache.remove(&"b".to_string());
    println!("Removed 'b': {:?}", removed);

    Ok(())
}

/// Example 2: Reading an entry protects it from the next eviction
fn promotion_on_read() -> Result<()> {
    println!("\n--- Example 2: Promotion on Read ---\n");

    let cache = LruCache::without_listener(2)?;
    cache.set("a", 1);
    cache.set("b", 2);
    println!("Order after inserts: {:?}", cache.keys());

    cache.get(&"a");
    println!("Order after get(a):  {:?}", cache.keys());

    cache.set("c", 3);
    println!("Order after set(c):  {:?} ('b' was evicted)", cache.keys());

    if let Some((key, value)) = cache.remove_oldest() {
        println!("Oldest entry removed: {} => {}", key, value);
    }

    Ok(())
}

/// Example 3: Cache statistics
fn cache_statistics() -> Result<()> {
    println!("\n--- Example 3: Cache Statistics ---\n");

    let cache = LruCache::without_listener(5)?;

    for i in 0..8 {
        cache.set(i, format!("value-{}", i));
    }
    println!("Inserted 8 entries into a cache of 5");

    // Generate some hits and misses
    for i in 0..10 {
        let _ = cache.get(&(i % 8));
    }
    println!("Performed 10 lookups (mix of hits and misses)\n");

    let stats = cache.stats();
    println!("Cache Statistics:");
    println!("  Hits:       {}", stats.hits());
    println!("  Misses:     {}", stats.misses());
    println!("  Hit Rate:   {:.1}%", stats.hit_rate() * 100.0);
    println!("  Insertions: {}", stats.insertions());
    println!("  Evictions:  {}", stats.evictions());
    println!("  Entries:    {}", stats.entry_count());

    let dropped = cache.clear();
    info!(dropped, "statistics demo finished");
    println!("\nCache cleared ({} entries dropped)", dropped);
    println!("  Entries: {}", cache.stats().entry_count());

    Ok(())
}
