//! In-memory cache implementation with LRU eviction.
//!
//! Mirrors the Redis backend: note list keys are tracked per owner so that
//! owner-prefix invalidation only touches that owner's keys.

use std::collections::{HashMap, HashSet};
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use lru::LruCache;
use tokio::sync::RwLock;
use uuid::Uuid;

use quicknotes_core::cache::{
    extract_owner_id_from_key, extract_owner_id_from_pattern, is_owner_notes_key,
    pattern_matches, Cache, Result,
};

/// A single cache entry with optional expiration.
#[derive(Debug, Clone)]
struct CacheEntry {
    value: Vec<u8>,
    expires_at: Option<Instant>,
}

impl CacheEntry {
    fn new(value: Vec<u8>, ttl: Option<Duration>) -> Self {
        let expires_at = ttl.map(|d| Instant::now() + d);
        Self { value, expires_at }
    }

    fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|exp| Instant::now() >= exp)
    }
}

/// In-memory cache with LRU eviction and lazy TTL expiry.
///
/// Expired entries are dropped when they are read. Once `max_entries` is
/// reached the least recently used entry is evicted.
#[derive(Debug, Clone)]
pub struct MemoryCache {
    store: Arc<RwLock<LruCache<String, CacheEntry>>>,
    /// owner_id -> note list keys cached for that owner.
    tracking: Arc<RwLock<HashMap<Uuid, HashSet<String>>>>,
}

impl MemoryCache {
    /// Creates a new in-memory cache holding at most `max_entries` values.
    ///
    /// A capacity of zero is raised to one.
    pub fn new(max_entries: usize) -> Self {
        let capacity = NonZeroUsize::new(max_entries).unwrap_or(NonZeroUsize::MIN);
        Self {
            store: Arc::new(RwLock::new(LruCache::new(capacity))),
            tracking: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    async fn untrack(&self, owner_id: Uuid, keys: &[String]) {
        let mut tracking = self.tracking.write().await;
        if let Some(tracked) = tracking.get_mut(&owner_id) {
            for key in keys {
                tracked.remove(key);
            }
            if tracked.is_empty() {
                tracking.remove(&owner_id);
            }
        }
    }

    /// Drops a note list key from the owner index once it leaves the store.
    async fn forget(&self, key: &str) {
        if is_owner_notes_key(key) {
            if let Some(owner_id) = extract_owner_id_from_key(key) {
                self.untrack(owner_id, &[key.to_string()]).await;
            }
        }
    }
}

#[async_trait]
impl Cache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        {
            let mut store = self.store.write().await;
            match store.get(key) {
                Some(entry) if entry.is_expired() => {
                    store.pop(key);
                }
                Some(entry) => return Ok(Some(entry.value.clone())),
                None => return Ok(None),
            }
        }

        self.forget(key).await;
        Ok(None)
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()> {
        let evicted = {
            let mut store = self.store.write().await;
            store
                .push(key.to_string(), CacheEntry::new(value.to_vec(), ttl))
                .map(|(evicted_key, _)| evicted_key)
                .filter(|evicted_key| evicted_key != key)
        };

        if let Some(evicted_key) = evicted {
            self.forget(&evicted_key).await;
        }

        if is_owner_notes_key(key) {
            if let Some(owner_id) = extract_owner_id_from_key(key) {
                let mut tracking = self.tracking.write().await;
                tracking.entry(owner_id).or_default().insert(key.to_string());
            }
        }

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.forget(key).await;
        self.store.write().await.pop(key);
        Ok(())
    }

    async fn delete_pattern(&self, pattern: &str) -> Result<()> {
        let Some(owner_id) = extract_owner_id_from_pattern(pattern) else {
            // Not scoped to an owner: scan the whole store.
            let mut store = self.store.write().await;
            let keys_to_delete: Vec<String> = store
                .iter()
                .filter(|(key, _)| pattern_matches(pattern, key))
                .map(|(key, _)| key.clone())
                .collect();
            for key in keys_to_delete {
                store.pop(&key);
            }
            return Ok(());
        };

        let keys_to_delete: Vec<String> = {
            let tracking = self.tracking.read().await;
            tracking
                .get(&owner_id)
                .map(|keys| {
                    keys.iter()
                        .filter(|key| pattern_matches(pattern, key))
                        .cloned()
                        .collect()
                })
                .unwrap_or_default()
        };

        if keys_to_delete.is_empty() {
            return Ok(());
        }

        {
            let mut store = self.store.write().await;
            for key in &keys_to_delete {
                store.pop(key);
            }
        }
        self.untrack(owner_id, &keys_to_delete).await;

        tracing::trace!(%owner_id, count = keys_to_delete.len(), "Deleted cached note lists");
        Ok(())
    }
}
