//! Application state.
//!
//! Shared by every request handler. Holds the Notes Service and the token
//! authority. The repository and cache backends are picked by feature flags
//! and injected here at startup.

use std::sync::Arc;

use axum::extract::FromRef;

use quicknotes_core::cache::Cache;
use quicknotes_core::storage::NoteRepository;

use crate::auth::TokenAuth;
use crate::config::Config;
use crate::service::NotesService;

/// Shared application state, cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub notes: NotesService,
    pub auth: Arc<TokenAuth>,
}

impl AppState {
    /// Wires the service and token authority from their dependencies.
    fn build(repository: Arc<dyn NoteRepository>, cache: Arc<dyn Cache>, config: &Config) -> Self {
        Self {
            notes: NotesService::new(repository, cache, config.cache_ttl()),
            auth: Arc::new(TokenAuth::new(
                config.jwt_secret.as_bytes(),
                config.token_ttl(),
            )),
        }
    }
}

impl FromRef<AppState> for Arc<TokenAuth> {
    fn from_ref(state: &AppState) -> Self {
        Arc::clone(&state.auth)
    }
}

// ============================================================================
// Factory functions for different backend combinations
// ============================================================================

#[cfg(all(feature = "sqlite", feature = "memory"))]
mod sqlite_memory {
    use super::*;
    use crate::cache::memory::MemoryCache;
    use crate::storage::SqliteRepository;

    impl AppState {
        /// Creates AppState with SQLite storage and in-memory cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repository = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);
            let cache = Arc::new(MemoryCache::new(config.cache_max_entries));

            Ok(Self::build(repository, cache, config))
        }
    }
}

#[cfg(all(feature = "sqlite", feature = "redis"))]
mod sqlite_redis {
    use super::*;
    use crate::cache::redis_impl::RedisCache;
    use crate::storage::SqliteRepository;

    impl AppState {
        /// Creates AppState with SQLite storage and Redis cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repository = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);
            let cache = Arc::new(RedisCache::new(&config.redis_url).await?);

            Ok(Self::build(repository, cache, config))
        }
    }
}

#[cfg(all(feature = "inmemory", feature = "memory"))]
mod inmemory_memory {
    use super::*;
    use crate::cache::memory::MemoryCache;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage and cache.
        /// Nothing survives a restart.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repository = Arc::new(InMemoryRepository::new());
            let cache = Arc::new(MemoryCache::new(config.cache_max_entries));

            Ok(Self::build(repository, cache, config))
        }
    }
}

#[cfg(all(feature = "inmemory", feature = "redis"))]
mod inmemory_redis {
    use super::*;
    use crate::cache::redis_impl::RedisCache;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage and Redis cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repository = Arc::new(InMemoryRepository::new());
            let cache = Arc::new(RedisCache::new(&config.redis_url).await?);

            Ok(Self::build(repository, cache, config))
        }
    }
}

// ============================================================================
// Test support
// ============================================================================
