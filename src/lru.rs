//! Least Recently Used (LRU) Cache Implementation
//!
//! This module provides an LRU cache with O(1) lookups and insertions, hit/miss
//! counters, an audit log of evicted keys, and a capacity that can be changed
//! while the cache is in use.
//!
//! # Algorithm
//!
//! Entries are kept in order of recency of use, most recently used first. A
//! lookup hit or a write moves the entry to the front. When a new key pushes the
//! cache past its capacity, the entry at the back (the least recently used one)
//! is evicted and its key is appended to the eviction log.
//!
//! ```text
//!   index: HashMap<K, Handle>
//!             │      │      │
//!             ▼      ▼      ▼
//!   [head] ⇄ MRU ⇄ ... ⇄ LRU ⇄ [tail]      (recency list, arena slots)
//! ```
//!
//! # Performance Characteristics
//!
//! - **Time Complexity**:
//!   - Get: O(1)
//!   - Put: O(1) amortized
//!   - Resize: O(k) where k is the number of entries evicted
//!
//! - **Space Complexity**:
//!   - O(n) where n is the capacity, plus one key per eviction log record
//!
//! Lookups and in-place updates never allocate. Slots freed by eviction are
//! reused by later inserts.
//!
//! # Thread Safety
//!
//! This implementation is not thread-safe. For concurrent access, wrap the
//! cache in a `Mutex` and hold the lock for the whole of each operation.

use crate::config::LruCacheConfig;
use crate::error::CacheError;
use crate::eviction::{EvictionCause, EvictionLog};
use crate::list::{self, Handle, List};
use crate::metrics::{CacheMetrics, LruCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use core::iter::FusedIterator;
use core::num::NonZeroUsize;
use log::{debug, trace};

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;
#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;
#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

/// Value returned by [`LruCache::get_or_miss`] when the key is absent.
pub const MISS_SENTINEL: i64 = -1;

/// Upper bound on up-front allocation, so a huge capacity does not reserve
/// memory it may never use.
const PREALLOC_LIMIT: usize = 4096;

/// An LRU cache keyed by integers, the shape used by the miss-sentinel API.
pub type IntLruCache<S = DefaultHashBuilder> = LruCache<i64, i64, S>;

/// An implementation of a Least Recently Used (LRU) cache.
///
/// The cache holds at most [`cap`](LruCache::cap) entries. Adding a new key to
/// a full cache evicts the least recently used entry and records its key in the
/// eviction log. The capacity can be changed with [`resize`](LruCache::resize).
///
/// # Examples
///
/// ```
/// use lru_ledger::LruCache;
///
/// let mut cache = LruCache::new(2).unwrap();
///
/// cache.put("apple", 1);
/// cache.put("banana", 2);
///
/// // Accessing an entry makes it the most recently used.
/// assert_eq!(cache.get(&"apple"), Some(&1));
///
/// // Adding beyond capacity evicts the least recently used entry.
/// assert_eq!(cache.put("cherry", 3), Some(("banana", 2)));
/// assert_eq!(cache.get(&"banana"), None);
///
/// assert_eq!(cache.hit_count(), 1);
/// assert_eq!(cache.miss_count(), 1);
/// assert_eq!(cache.eviction_log(), vec!["banana"]);
/// ```
pub struct LruCache<K, V, S = DefaultHashBuilder> {
    cap: NonZeroUsize,
    list: List<(K, V)>,
    map: HashMap<K, Handle, S>,
    metrics: LruCacheMetrics,
    evictions: EvictionLog<K>,
}

impl<K: Hash + Eq, V> LruCache<K, V> {
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// Fails with [`CacheError::InvalidCapacity`] if `capacity` is 0.
    pub fn new(capacity: usize) -> Result<LruCache<K, V, DefaultHashBuilder>, CacheError> {
        LruCache::with_hasher(capacity, DefaultHashBuilder::default())
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> LruCache<K, V, S> {
    /// Creates an empty cache that hashes keys with `hash_builder`.
    pub fn with_hasher(capacity: usize, hash_builder: S) -> Result<Self, CacheError> {
        let cap = LruCacheConfig::new(capacity).validated_capacity()?;
        let prealloc = cap.get().min(PREALLOC_LIMIT);
        Ok(LruCache {
            cap,
            list: List::with_capacity(prealloc),
            map: HashMap::with_capacity_and_hasher(prealloc, hash_builder),
            metrics: LruCacheMetrics::new(),
            evictions: EvictionLog::new(),
        })
    }

    /// Creates an empty cache from `config`.
    ///
    /// Uses `S::default()` when `hasher` is `None`.
    pub fn init(config: LruCacheConfig, hasher: Option<S>) -> Result<Self, CacheError>
    where
        S: Default,
    {
        LruCache::with_hasher(config.capacity, hasher.unwrap_or_default())
    }

    /// Looks up `key`, marking it most recently used on a hit.
    ///
    /// Counts one hit or one miss.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let Some(&handle) = self.map.get(key) else {
            self.metrics.record_miss();
            return None;
        };
        self.metrics.record_hit();
        self.list.move_to_front(handle);
        self.list.get(handle).map(|(_, v)| v)
    }

    /// Like [`get`](LruCache::get), but returns a mutable reference.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let Some(&handle) = self.map.get(key) else {
            self.metrics.record_miss();
            return None;
        };
        self.metrics.record_hit();
        self.list.move_to_front(handle);
        self.list.get_mut(handle).map(|(_, v)| v)
    }

    /// Returns the value for `key` without touching recency or counters.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let handle = *self.map.get(key)?;
        self.list.get(handle).map(|(_, v)| v)
    }

    /// Returns `true` if `key` is resident. Does not touch recency or counters.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.contains_key(key)
    }

    /// Changes the capacity, evicting least recently used entries until the
    /// cache fits.
    ///
    /// Returns the number of entries evicted. A capacity of 0 is rejected with
    /// [`CacheError::InvalidCapacity`] and leaves the cache unchanged.
    pub fn resize(&mut self, new_capacity: usize) -> Result<usize, CacheError>
    where
        K: Clone,
    {
        let cap = LruCacheConfig::new(new_capacity).validated_capacity()?;
        let old_cap = self.cap;
        self.cap = cap;

        let mut evicted = 0;
        while self.list.len() > cap.get() {
            if self.evict_lru(EvictionCause::Resize).is_none() {
                break;
            }
            evicted += 1;
        }

        debug!(
            "resized LRU cache from {} to {} entries, evicted {}",
            old_cap, cap, evicted
        );
        Ok(evicted)
    }

    /// Removes the entry at the back of the recency list from both the list
    /// and the index, and records it in the eviction log.
    fn evict_lru(&mut self, cause: EvictionCause) -> Option<(K, V)>
    where
        K: Clone,
    {
        let (key, value) = self.list.pop_back()?;
        self.map.remove(&key);
        self.metrics.record_eviction(cause);
        self.evictions.push(key.clone());
        trace!(
            "evicted LRU entry ({}), {} of {} entries resident",
            cause,
            self.list.len(),
            self.cap
        );
        Some((key, value))
    }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> LruCache<K, V, S> {
    /// Inserts or updates `key`, making it the most recently used entry.
    ///
    /// Updating an existing key replaces its value and returns `None`. Adding a
    /// new key to a full cache evicts the least recently used entry, which is
    /// returned and whose key is appended to the eviction log. Writes count as
    /// neither hits nor misses.
    pub fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(&handle) = self.map.get(&key) {
            if let Some(entry) = self.list.get_mut(handle) {
                entry.1 = value;
            }
            self.list.move_to_front(handle);
            self.metrics.record_update();
            return None;
        }

        let handle = self.list.push_front((key.clone(), value));
        self.map.insert(key, handle);
        self.metrics.record_insertion();

        // At most one over: the cache was within capacity before this insert.
        if self.list.len() > self.cap.get() {
            self.evict_lru(EvictionCause::Overflow)
        } else {
            None
        }
    }

    /// Returns a copy of the eviction log, oldest eviction first.
    pub fn eviction_log(&self) -> Vec<K> {
        self.evictions.snapshot()
    }
}

impl<K, V, S> LruCache<K, V, S> {
    /// Current capacity.
    #[inline]
    pub fn cap(&self) -> NonZeroUsize {
        self.cap
    }

    /// Number of resident entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.len() == 0
    }

    #[inline]
    pub fn hit_count(&self) -> u64 {
        self.metrics.hits
    }

    #[inline]
    pub fn miss_count(&self) -> u64 {
        self.metrics.misses
    }

    /// Read-only view of the eviction log.
    pub fn evictions(&self) -> &EvictionLog<K> {
        &self.evictions
    }

    /// Empties the eviction log. Counters and resident entries are untouched.
    pub fn clear_eviction_log(&mut self) {
        self.evictions.clear();
    }

    /// Returns the entry that the next overflow would evict.
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        let (k, v) = self.list.get(self.list.back()?)?;
        Some((k, v))
    }

    /// Iterates over resident entries from most to least recently used.
    ///
    /// Iteration does not change recency.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.list.iter(),
        }
    }

    /// Renders the entries as `[k=v, ...]`, most recently used first.
    ///
    /// Meant for diagnostics; the format is not a stable interface.
    pub fn describe(&self) -> String
    where
        K: fmt::Display,
        V: fmt::Display,
    {
        self.to_string()
    }
}

impl<S: BuildHasher> LruCache<i64, i64, S> {
    /// Looks up `key`, returning [`MISS_SENTINEL`] when it is absent.
    ///
    /// Counts hits and misses like [`get`](LruCache::get). A stored value equal
    /// to the sentinel cannot be told apart from a miss; use `get` for that.
    pub fn get_or_miss(&mut self, key: i64) -> i64 {
        self.get(&key).copied().unwrap_or(MISS_SENTINEL)
    }
}

impl<K: fmt::Display, V: fmt::Display, S> fmt::Display for LruCache<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, (k, v)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", k, v)?;
        }
        f.write_str("]")
    }
}

impl<K, V, S> fmt::Debug for LruCache<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("capacity", &self.cap)
            .field("len", &self.list.len())
            .field("hits", &self.metrics.hits)
            .field("misses", &self.metrics.misses)
            .field("evictions", &self.evictions.len())
            .finish()
    }
}

impl<K, V, S> CacheMetrics for LruCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.metrics.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        self.metrics.algorithm_name()
    }
}

impl<'a, K, V, S> IntoIterator for &'a LruCache<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

/// Iterator over cache entries, most recently used first.
///
/// Created by [`LruCache::iter`].
pub struct Iter<'a, K, V> {
    inner: list::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<(&'a K, &'a V)> {
        self.inner.next().map(|(k, v)| (k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

impl<K, V> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter").field("remaining", &self.len()).finish()
    }
}

#[cfg(test)]
impl<K: Hash + Eq, V, S: BuildHasher> LruCache<K, V, S> {
    /// Checks that the index and the recency list describe the same entries.
    fn assert_consistent(&self) {
        self.list.assert_links();
        assert_eq!(self.map.len(), self.list.len());
        assert!(self.list.len() <= self.cap.get());
        for (key, _) in self.list.iter() {
            let handle = *self.map.get(key).expect("listed key missing from index");
            let (stored, _) = self.list.get(handle).expect("index names an empty slot");
            assert!(stored == key, "index handle points at another key");
        }
    }
}
