//! Cache Module
//!
//! Bounded in-memory caching with least-recently-used eviction.

mod bounded;
mod key;
mod lru;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

use std::num::NonZeroUsize;

// Re-export public types
pub use bounded::BoundedLruCache;
pub use key::{CacheKey, EntityKind};
pub use lru::{Iter, RecencyList};
pub use stats::CacheStats;
pub use store::LruStore;

// == Public Constants ==
/// Number of entries a cache holds when no capacity is configured
pub const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(5) {
    Some(capacity) => capacity,
    None => panic!("default capacity must be non-zero"),
};
