//! Cache Configuration
//!
//! Construction parameters for [`LruCache`](crate::LruCache), following the
//! plain-struct style: every field is public and there is no builder.
//!
//! # Examples
//!
//! ```
//! use lru_ledger::config::LruCacheConfig;
//! use lru_ledger::LruCache;
//!
//! let config = LruCacheConfig { capacity: 1000 };
//! let cache: LruCache<String, i32> = LruCache::init(config, None).unwrap();
//! assert_eq!(cache.cap().get(), 1000);
//!
//! // Zero entries is never a valid capacity.
//! let config = LruCacheConfig { capacity: 0 };
//! assert!(LruCache::<String, i32>::init(config, None).is_err());
//! ```

use crate::error::CacheError;
use core::fmt;
use core::num::NonZeroUsize;
use log::warn;

/// Configuration for an LRU cache.
///
/// # Fields
///
/// - `capacity`: Maximum number of resident entries. Must be at least 1; the
///   check happens when the cache is built, not when the struct is created.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LruCacheConfig {
    /// Maximum number of key-value pairs the cache can hold.
    pub capacity: usize,
}

impl LruCacheConfig {
    /// Creates a configuration for a cache holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Returns the capacity as a `NonZeroUsize`, or `InvalidCapacity` if it is 0.
    pub fn validated_capacity(&self) -> Result<NonZeroUsize, CacheError> {
        NonZeroUsize::new(self.capacity).ok_or_else(|| {
            warn!("rejected cache capacity {}", self.capacity);
            CacheError::InvalidCapacity {
                requested: self.capacity,
            }
        })
    }
}

impl fmt::Debug for LruCacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCacheConfig")
            .field("capacity", &self.capacity)
            .finish()
    }
}
