//! Error types returned by cache construction and resizing.

use core::fmt;

/// Errors reported by [`LruCache`](crate::LruCache).
///
/// A cache miss is not an error; lookups report it as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheError {
    /// The requested capacity was below the minimum of one entry.
    ///
    /// Returned by the constructors and by [`LruCache::resize`](crate::LruCache::resize).
    /// A rejected resize leaves the cache untouched.
    InvalidCapacity {
        /// The capacity that was asked for.
        requested: usize,
    },
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheError::InvalidCapacity { requested } => {
                write!(f, "invalid cache capacity {}: must be at least 1", requested)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CacheError {}
