//! Football Cache - bounded LRU caching for football entities
//!
//! Provides a thread-safe least-recently-used cache, read-through helpers for
//! services backed by a slower store, and a small HTTP server exposing one
//! shared cache instance.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod service;

pub use api::AppState;
pub use cache::{BoundedLruCache, CacheKey, CacheStats, EntityKind};
pub use config::Config;
pub use service::{BackingStore, EntityCache};
