//! Resolved-label memo
//!
//! Label resolution runs several table lookups per path and is repeated for
//! every ancestor on every navigation. With the `cache` feature the resolver
//! keeps recent answers in an LRU map.

use crate::trace_log;
use lru::LruCache;
use std::num::NonZeroUsize;

/// Hit/miss counters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
    pub invalidations: usize,
}

impl CacheStats {
    /// Fraction of lookups answered from the cache
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// LRU map from path to resolved label
#[derive(Debug)]
pub struct LabelCache {
    labels: LruCache<String, String>,
    stats: CacheStats,
}

impl LabelCache {
    /// Default number of remembered paths
    pub const DEFAULT_CAPACITY: usize = 256;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// A zero capacity is bumped to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            labels: LruCache::new(capacity),
            stats: CacheStats::default(),
        }
    }

    pub fn get(&mut self, path: &str) -> Option<String> {
        if let Some(label) = self.labels.get(path) {
            self.stats.hits += 1;
            trace_log!("label cache hit for '{}'", path);
            Some(label.clone())
        } else {
            self.stats.misses += 1;
            trace_log!("label cache miss for '{}'", path);
            None
        }
    }

    pub fn insert(&mut self, path: String, label: String) {
        self.labels.put(path, label);
    }

    pub fn clear(&mut self) {
        trace_log!("clearing label cache");
        self.labels.clear();
        self.stats.invalidations += 1;
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = CacheStats::default();
    }
}

impl Default for LabelCache {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LabelCache {
    fn clone(&self) -> Self {
        Self {
            labels: LruCache::new(self.labels.cap()),
            stats: self.stats.clone(),
        }
    }
}
