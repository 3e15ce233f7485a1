//! Redis cache implementation.
//!
//! Note list keys are tracked in a Redis Set per owner
//! (`notes:{owner}:_keys`), so owner-prefix invalidation is a SMEMBERS plus a
//! DEL instead of a SCAN over the keyspace.
//!
//! The commands are not atomic. A crash between them leaves stale members in
//! the tracking set, which later DEL/SREM calls treat as no-ops.

use std::time::Duration;

use async_trait::async_trait;
use redis::aio::{ConnectionManager, ConnectionManagerConfig};
use redis::AsyncCommands;
use tokio::sync::OnceCell;

use quicknotes_core::cache::{
    extract_owner_id_from_key, extract_owner_id_from_pattern, is_owner_notes_key,
    owner_tracking_key, pattern_matches, Cache, Result,
};

use super::error::map_redis_error;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(1);

/// Redis cache backend using a connection manager.
///
/// The manager is created on first use. While Redis is unreachable every
/// call fails with `CacheError::ConnectionFailed` and the next call retries.
pub struct RedisCache {
    client: redis::Client,
    conn: OnceCell<ConnectionManager>,
}

impl RedisCache {
    /// Creates a cache for Redis at `url` (e.g., "redis://localhost:6379")
    /// and tries to connect once.
    ///
    /// An unreachable server is logged and does not fail construction.
    ///
    /// # Errors
    ///
    /// Returns an error if `url` is not a valid Redis URL.
    pub async fn new(url: &str) -> Result<Self> {
        let client = redis::Client::open(url).map_err(map_redis_error)?;
        let cache = Self {
            client,
            conn: OnceCell::new(),
        };

        if let Err(err) = cache.connection().await {
            tracing::warn!(error = %err, "Redis unavailable at startup, serving without cache");
        }

        Ok(cache)
    }

    /// Returns a handle to the shared connection, connecting if needed.
    async fn connection(&self) -> Result<ConnectionManager> {
        self.conn
            .get_or_try_init(|| {
                let config = ConnectionManagerConfig::new()
                    .set_number_of_retries(1)
                    .set_connection_timeout(CONNECT_TIMEOUT);
                ConnectionManager::new_with_config(self.client.clone(), config)
            })
            .await
            .cloned()
            .map_err(map_redis_error)
    }
}

#[async_trait]
impl Cache for RedisCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut conn = self.connection().await?;
        conn.get(key).await.map_err(map_redis_error)
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()> {
        let mut conn = self.connection().await?;

        match ttl {
            Some(duration) => {
                let seconds = duration.as_secs().max(1);
                conn.set_ex::<_, _, ()>(key, value, seconds)
                    .await
                    .map_err(map_redis_error)?;
            }
            None => {
                conn.set::<_, _, ()>(key, value)
                    .await
                    .map_err(map_redis_error)?;
            }
        }

        if is_owner_notes_key(key) {
            if let Some(owner_id) = extract_owner_id_from_key(key) {
                let tracking_key = owner_tracking_key(owner_id);
                conn.sadd::<_, _, ()>(&tracking_key, key)
                    .await
                    .map_err(map_redis_error)?;
                // The index lives as long as the newest list key it holds.
                if let Some(duration) = ttl {
                    let seconds = i64::try_from(duration.as_secs().max(1)).unwrap_or(i64::MAX);
                    conn.expire::<_, ()>(&tracking_key, seconds)
                        .await
                        .map_err(map_redis_error)?;
                }
            }
        }

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let mut conn = self.connection().await?;

        if is_owner_notes_key(key) {
            if let Some(owner_id) = extract_owner_id_from_key(key) {
                conn.srem::<_, _, ()>(owner_tracking_key(owner_id), key)
                    .await
                    .map_err(map_redis_error)?;
            }
        }

        conn.del::<_, ()>(key).await.map_err(map_redis_error)
    }

    async fn delete_pattern(&self, pattern: &str) -> Result<()> {
        // Only owner-scoped keys are tracked.
        let Some(owner_id) = extract_owner_id_from_pattern(pattern) else {
            tracing::debug!(pattern, "Ignoring untracked cache pattern");
            return Ok(());
        };

        let mut conn = self.connection().await?;
        let tracking_key = owner_tracking_key(owner_id);

        let tracked_keys: Vec<String> = conn
            .smembers(&tracking_key)
            .await
            .map_err(map_redis_error)?;

        let keys_to_delete: Vec<&String> = tracked_keys
            .iter()
            .filter(|k| pattern_matches(pattern, k))
            .collect();

        if keys_to_delete.is_empty() {
            return Ok(());
        }

        conn.del::<_, ()>(&keys_to_delete)
            .await
            .map_err(map_redis_error)?;
        conn.srem::<_, _, ()>(&tracking_key, &keys_to_delete)
            .await
            .map_err(map_redis_error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quicknotes_core::cache::{notes_key, owner_notes_pattern};
    use uuid::Uuid;

    fn redis_url() -> String {
        std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string())
    }

    /// Returns `None` when Redis is not reachable so the test can skip.
    async fn get_test_cache() -> Option<RedisCache> {
        let cache = RedisCache::new(&redis_url()).await.ok()?;
        cache.connection().await.ok()?;
        Some(cache)
    }

    #[tokio::test]
    async fn test_unreachable_redis_reports_outage() {
        let cache = RedisCache::new("redis://127.0.0.1:1").await.unwrap();

        let err = cache.get("notes:any:all").await.unwrap_err();
        assert!(err.is_outage());

        let err = cache.set("notes:any:all", b"[]", None).await.unwrap_err();
        assert!(err.is_outage());
    }

    #[tokio::test]
    async fn test_invalid_url_is_rejected() {
        assert!(RedisCache::new("not a url").await.is_err());
    }

    #[tokio::test]
    async fn test_redis_set_and_get() {
        let Some(cache) = get_test_cache().await else {
            eprintln!("Skipping test: Redis not available");
            return;
        };

        let key = format!("test:quicknotes:{}", Uuid::new_v4());
        cache.set(&key, b"hello", None).await.unwrap();

        assert_eq!(cache.get(&key).await.unwrap(), Some(b"hello".to_vec()));

        cache.delete(&key).await.unwrap();
        assert!(cache.get(&key).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_redis_ttl_expiration() {
        let Some(cache) = get_test_cache().await else {
            eprintln!("Skipping test: Redis not available");
            return;
        };

        let key = format!("test:quicknotes:{}", Uuid::new_v4());
        cache
            .set(&key, b"short", Some(Duration::from_secs(1)))
            .await
            .unwrap();
        assert!(cache.get(&key).await.unwrap().is_some());

        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert!(cache.get(&key).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_redis_tracking_set_expires_with_lists() {
        let Some(cache) = get_test_cache().await else {
            eprintln!("Skipping test: Redis not available");
            return;
        };

        let owner = Uuid::new_v4();
        cache
            .set(&notes_key(owner, None), b"[]", Some(Duration::from_secs(1)))
            .await
            .unwrap();

        let mut conn = cache.connection().await.unwrap();
        let ttl: i64 = conn.ttl(owner_tracking_key(owner)).await.unwrap();
        assert!(ttl > 0);

        tokio::time::sleep(Duration::from_millis(1500)).await;
        let exists: bool = conn.exists(owner_tracking_key(owner)).await.unwrap();
        assert!(!exists);
    }

    #[tokio::test]
    async fn test_redis_owner_invalidation() {
        let Some(cache) = get_test_cache().await else {
            eprintln!("Skipping test: Redis not available");
            return;
        };

        let owner = Uuid::new_v4();
        let other = Uuid::new_v4();
        let all = notes_key(owner, None);
        let filtered = notes_key(owner, Some(&["work".to_string()]));
        let other_all = notes_key(other, None);

        cache.set(&all, b"1", None).await.unwrap();
        cache.set(&filtered, b"2", None).await.unwrap();
        cache.set(&other_all, b"3", None).await.unwrap();

        cache
            .delete_pattern(&owner_notes_pattern(owner))
            .await
            .unwrap();

        assert!(cache.get(&all).await.unwrap().is_none());
        assert!(cache.get(&filtered).await.unwrap().is_none());
        assert!(cache.get(&other_all).await.unwrap().is_some());

        let mut conn = cache.connection().await.unwrap();
        let members: Vec<String> = conn.smembers(owner_tracking_key(owner)).await.unwrap();
        assert!(members.is_empty());

        cache
            .delete_pattern(&owner_notes_pattern(other))
            .await
            .unwrap();
    }
}
