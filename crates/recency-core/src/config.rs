//! Cache configuration options

use crate::error::{CacheError, Result};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

/// Configuration for an LRU cache
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Maximum number of entries in the cache
    pub max_entries: usize,
    /// Label used in log events
    pub name: String,
    /// Whether hit/miss/eviction counters are maintained
    pub stats_enabled: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: 1000,
            name: "lru".to_string(),
            stats_enabled: true,
        }
    }
}

impl CacheConfig {
    /// Create a new cache configuration with the given capacity
    pub fn new(max_entries: usize) -> Self {
        Self {
            max_entries,
            ..Default::default()
        }
    }

    /// Parse a configuration from a JSON document.
    ///
    /// Missing fields fall back to their defaults. The result is validated.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: CacheConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the maximum number of entries
    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = max_entries;
        self
    }

    /// Set the name used in log events
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Enable or disable statistics collection
    pub fn with_stats(mut self, enabled: bool) -> Self {
        self.stats_enabled = enabled;
        self
    }

    /// Check that the configuration describes a usable cache
    pub fn validate(&self) -> Result<()> {
        self.capacity().map(|_| ())
    }

    /// The configured capacity, rejecting zero
    pub fn capacity(&self) -> Result<NonZeroUsize> {
        NonZeroUsize::new(self.max_entries).ok_or(CacheError::InvalidCapacity(self.max_entries))
    }
}
