//! Read-Through Caching
//!
//! Helpers for services that sit in front of a slower system of record.
//! The cache never knows whether the backing store changed, so callers:
//! - look up through [`EntityCache::get_or_load`] (miss loads, then caches),
//! - call [`EntityCache::refresh`] after writing an entity,
//! - call [`EntityCache::invalidate`] after deleting one.

use std::fmt::Debug;
use std::sync::Arc;

use tracing::debug;

use crate::cache::{BoundedLruCache, CacheKey, EntityKind};

// == Backing Store ==
/// System of record for one entity type, looked up by numeric id.
pub trait BackingStore<V> {
    /// Failure reported by the store itself; passed through unchanged.
    type Error;

    /// Loads the entity with `id`, or `Ok(None)` if it does not exist.
    fn load(&self, id: i32) -> Result<Option<V>, Self::Error>;
}

// == Entity Cache ==
/// Cache view for a single entity kind.
///
/// Keys are rendered as `<prefix><id>` so several views may share one
/// underlying `BoundedLruCache`.
#[derive(Debug)]
pub struct EntityCache<V> {
    kind: EntityKind,
    cache: Arc<BoundedLruCache<String, V>>,
}

impl<V> Clone for EntityCache<V> {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            cache: Arc::clone(&self.cache),
        }
    }
}

impl<V> EntityCache<V>
where
    V: Clone + Debug,
{
    pub fn new(kind: EntityKind, cache: Arc<BoundedLruCache<String, V>>) -> Self {
        Self { kind, cache }
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// The shared cache behind this view.
    pub fn inner(&self) -> &Arc<BoundedLruCache<String, V>> {
        &self.cache
    }

    /// Cached value for `id`, without consulting the backing store.
    pub fn cached(&self, id: i32) -> Option<V> {
        self.cache.get(self.key(id).as_str())
    }

    // == Get Or Load ==
    /// Returns the entity for `id`, loading it from `store` on a miss.
    ///
    /// Entities that do not exist are not cached, so a later insert in the
    /// store is picked up by the next lookup. Store errors are returned as-is
    /// and leave the cache untouched.
    pub fn get_or_load<S>(&self, id: i32, store: &S) -> Result<Option<V>, S::Error>
    where
        S: BackingStore<V>,
    {
        let key = self.key(id);
        if let Some(value) = self.cache.get(key.as_str()) {
            return Ok(Some(value));
        }

        let loaded = store.load(id)?;
        match &loaded {
            Some(value) => self.cache.put(key, value.clone()),
            None => debug!(%key, "Entity not found in backing store"),
        }
        Ok(loaded)
    }

    /// Stores the current state of `id` after the backing store was updated.
    pub fn refresh(&self, id: i32, value: V) {
        self.cache.put(self.key(id), value);
    }

    /// Drops `id` after it was deleted from the backing store.
    pub fn invalidate(&self, id: i32) -> bool {
        self.cache.remove(self.key(id).as_str())
    }

    fn key(&self, id: i32) -> String {
        CacheKey::new(self.kind, id).to_string()
    }
}
