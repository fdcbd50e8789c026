//! Eviction audit log.
//!
//! Every entry the cache drops to respect its capacity is recorded here, in the
//! order it was dropped. The log only grows until the owner clears it.

use alloc::vec::Vec;
use core::fmt;
use core::slice;

/// Why an entry was evicted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvictionCause {
    /// A `put` of a new key pushed the cache one entry over capacity.
    Overflow,
    /// A `resize` lowered the capacity below the number of resident entries.
    Resize,
}

impl fmt::Display for EvictionCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvictionCause::Overflow => f.write_str("overflow"),
            EvictionCause::Resize => f.write_str("resize"),
        }
    }
}

/// Ordered record of evicted keys, oldest eviction first.
///
/// Only the cache appends to or clears the log. Callers get a read-only view
/// through [`LruCache::evictions`](crate::LruCache::evictions) or an owned copy
/// through [`LruCache::eviction_log`](crate::LruCache::eviction_log).
#[derive(Clone, PartialEq, Eq)]
pub struct EvictionLog<K> {
    keys: Vec<K>,
}

impl<K> EvictionLog<K> {
    pub(crate) fn new() -> Self {
        EvictionLog { keys: Vec::new() }
    }

    pub(crate) fn push(&mut self, key: K) {
        self.keys.push(key);
    }

    pub(crate) fn clear(&mut self) {
        self.keys.clear();
    }

    /// Number of recorded evictions since creation or the last clear.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterates over evicted keys in eviction order.
    pub fn iter(&self) -> slice::Iter<'_, K> {
        self.keys.iter()
    }

    /// Most recently evicted key.
    pub fn last(&self) -> Option<&K> {
        self.keys.last()
    }

    /// Copies the log into a vector the caller owns.
    pub fn snapshot(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.keys.clone()
    }
}

impl<'a, K> IntoIterator for &'a EvictionLog<K> {
    type Item = &'a K;
    type IntoIter = slice::Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}

impl<K: fmt::Debug> fmt::Debug for EvictionLog<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.keys.iter()).finish()
    }
}
