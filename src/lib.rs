#![doc = include_str!("../README.md")]
//!
//! ---
//!
//! # Code Reference
//!
//! ## Quick Reference
//!
//! | Item | Description |
//! |------|-------------|
//! | [`LruCache`] | The cache: O(1) `get`/`put`, counters, eviction log, `resize` |
//! | [`IntLruCache`] | `LruCache<i64, i64>`, with the `-1` miss sentinel API |
//! | [`config::LruCacheConfig`] | Construction parameters |
//! | [`error::CacheError`] | `InvalidCapacity` from construction and `resize` |
//! | [`eviction::EvictionLog`] | Read-only view of evicted keys |
//! | [`metrics::CacheMetrics`] | Uniform metrics reporting |
//!
//! ## Performance Characteristics
//!
//! | Operation | Cost | Allocates |
//! |-----------|------|-----------|
//! | `get` / `get_mut` / `peek` | O(1) | Never |
//! | `put` (existing key) | O(1) | Never |
//! | `put` (new key) | O(1) amortized | Only while the arena or log grows |
//! | `resize` | O(k), k = entries evicted | Only while the log grows |
//!
//! ## Layout
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │ LruCache                                                         │
//! │                                                                  │
//! │  index: HashMap<K, Handle>        counters: LruCacheMetrics      │
//! │     │                             log: EvictionLog<K>            │
//! │     ▼                                                            │
//! │  arena: [head][tail][slot 2][slot 3] ...                         │
//! │          head ⇄ MRU ⇄ ... ⇄ LRU ⇄ tail    (links are indices)    │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use lru_ledger::LruCache;
//!
//! let mut cache = LruCache::new(2).unwrap();
//! cache.put(1, 10);
//! cache.put(2, 20);
//! assert_eq!(cache.get(&1), Some(&10)); // 1 becomes most recently used
//! cache.put(3, 30);                     // 2 evicted
//! assert_eq!(cache.to_string(), "[3=30, 1=10]");
//!
//! cache.resize(1).unwrap();             // 1 evicted
//! assert_eq!(cache.eviction_log(), vec![2, 1]);
//! ```
//!
//! ## Modules
//!
//! - [`lru`]: The LRU cache
//! - [`config`]: Configuration structure
//! - [`error`]: Error type
//! - [`eviction`]: Eviction log and eviction causes
//! - [`metrics`]: Counters and metrics reporting

#![no_std]

extern crate alloc;

#[cfg(any(feature = "std", not(feature = "hashbrown")))]
extern crate std;

/// Arena-backed doubly linked list used for recency order.
///
/// Internal infrastructure: elements are addressed by slot handles, and the
/// head and tail are permanent sentinel slots.
pub(crate) mod list;

/// Cache configuration structure.
pub mod config;

/// Error type for construction and resizing.
pub mod error;

/// Eviction audit log.
///
/// Keeps the keys of evicted entries in eviction order until cleared.
pub mod eviction;

/// Least Recently Used (LRU) cache implementation.
///
/// Provides a bounded cache that evicts the least recently used entry when a
/// new key would exceed the capacity, and whose capacity can be changed at
/// runtime.
pub mod lru;

/// Cache metrics.
///
/// Hit, miss, write and eviction counters with a deterministic report format.
pub mod metrics;

pub use config::LruCacheConfig;
pub use error::CacheError;
pub use eviction::{EvictionCause, EvictionLog};
pub use lru::{IntLruCache, Iter, LruCache, MISS_SENTINEL};
pub use metrics::{CacheMetrics, LruCacheMetrics};
