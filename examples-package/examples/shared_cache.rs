//! Shared Cache Example
//!
//! Builds a cache from JSON configuration and shares it between threads.
//!
//! ```bash
//! cargo run --example shared_cache
//! ```

use anyhow::Result;
use recency_cache::{CacheConfig, LruCache};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use tracing::info;

const CONFIG: &str = r#"{ "max_entries": 128, "name": "resolver" }"#;

fn main() -> Result<()> {
    recency_demos::init_logging(true);

    println!("=== Shared Cache Example ===\n");

    let config = CacheConfig::from_json(CONFIG)?;
    info!(name = %config.name, max_entries = config.max_entries, "loaded cache config");

    let closed = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&closed);
    let cache = Arc::new(LruCache::from_config(
        &config,
        move |_host: &String, _addr: &u32| {
            // stand-in for releasing a resource tied to the entry
            counter.fetch_add(1, Ordering::Relaxed);
        },
    )?);

    let workers: Vec<_> = (0..4u32)
        .map(|worker| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                for i in 0..100u32 {
                    let host = format!("host-{}.internal", (worker * 37 + i) % 200);
                    if cache.get(&host).is_none() {
                        cache.set(host, worker * 1_000 + i);
                    }
                }
            })
        })
        .collect();

    for worker in workers {
        if worker.join().is_err() {
            anyhow::bail!("worker thread panicked");
        }
    }

    let stats = cache.stats();
    info!(entries = cache.len(), evictions = stats.evictions(), "workers finished");
    println!("Entries:          {}", cache.len());
    println!("Hits / misses:    {} / {}", stats.hits(), stats.misses());
    println!("Evictions:        {}", stats.evictions());
    println!("Listener calls:   {}", closed.load(Ordering::Relaxed));
    let keys = cache.keys();
    println!("Most recent keys: {:?}", &keys[..keys.len().min(5)]);

    Ok(())
}
