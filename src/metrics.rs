//! Cache Metrics
//!
//! Counters kept by the cache and a uniform way to report them.
//!
//! Reports are `BTreeMap`s rather than `HashMap`s so that keys always come out
//! in the same order, which keeps printed output and test expectations stable.

use crate::eviction::EvictionCause;
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

/// Counters for an LRU cache.
///
/// `hits` and `misses` only move on lookups (`get`, `get_mut`). Writes are
/// tracked separately as `insertions` (new key) and `updates` (existing key).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LruCacheMetrics {
    /// Lookups that found their key.
    pub hits: u64,

    /// Lookups that did not find their key.
    pub misses: u64,

    /// `put` calls that created a new entry.
    pub insertions: u64,

    /// `put` calls that overwrote an existing entry.
    pub updates: u64,

    /// Entries evicted because a `put` overflowed the capacity.
    pub overflow_evictions: u64,

    /// Entries evicted because `resize` shrank the capacity.
    pub resize_evictions: u64,
}

impl LruCacheMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub(crate) fn record_hit(&mut self) {
        self.hits += 1;
    }

    #[inline]
    pub(crate) fn record_miss(&mut self) {
        self.misses += 1;
    }

    #[inline]
    pub(crate) fn record_insertion(&mut self) {
        self.insertions += 1;
    }

    #[inline]
    pub(crate) fn record_update(&mut self) {
        self.updates += 1;
    }

    pub(crate) fn record_eviction(&mut self, cause: EvictionCause) {
        match cause {
            EvictionCause::Overflow => self.overflow_evictions += 1,
            EvictionCause::Resize => self.resize_evictions += 1,
        }
    }

    /// Total lookups, hits plus misses.
    pub fn requests(&self) -> u64 {
        self.hits + self.misses
    }

    /// Total evictions of either cause.
    pub fn evictions(&self) -> u64 {
        self.overflow_evictions + self.resize_evictions
    }

    /// Fraction of lookups that hit, between 0.0 and 1.0.
    ///
    /// Returns 0.0 before the first lookup.
    pub fn hit_rate(&self) -> f64 {
        match self.requests() {
            0 => 0.0,
            requests => self.hits as f64 / requests as f64,
        }
    }

    /// Fraction of lookups that missed, between 0.0 and 1.0.
    ///
    /// Returns 0.0 before the first lookup.
    pub fn miss_rate(&self) -> f64 {
        match self.requests() {
            0 => 0.0,
            requests => self.misses as f64 / requests as f64,
        }
    }

    /// Converts the counters to a map for reporting.
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = BTreeMap::new();

        metrics.insert("cache_hits".to_string(), self.hits as f64);
        metrics.insert("cache_misses".to_string(), self.misses as f64);
        metrics.insert("requests".to_string(), self.requests() as f64);
        metrics.insert("insertions".to_string(), self.insertions as f64);
        metrics.insert("updates".to_string(), self.updates as f64);

        metrics.insert("evictions".to_string(), self.evictions() as f64);
        metrics.insert(
            "overflow_evictions".to_string(),
            self.overflow_evictions as f64,
        );
        metrics.insert("resize_evictions".to_string(), self.resize_evictions as f64);

        // Rates (0.0 to 1.0)
        metrics.insert("hit_rate".to_string(), self.hit_rate());
        metrics.insert("miss_rate".to_string(), self.miss_rate());

        metrics
    }
}

/// Uniform metrics reporting.
///
/// Implemented by the counters themselves and by [`LruCache`](crate::LruCache),
/// so reporting code can take either as `&dyn CacheMetrics`.
pub trait CacheMetrics {
    /// Returns all metrics as name/value pairs, sorted by name.
    fn metrics(&self) -> BTreeMap<String, f64>;

    /// Short name of the eviction policy, e.g. `"LRU"`.
    fn algorithm_name(&self) -> &'static str;
}

impl CacheMetrics for LruCacheMetrics {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        "LRU"
    }
}
