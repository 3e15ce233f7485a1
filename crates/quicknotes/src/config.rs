use std::{env, time::Duration};

/// Secret used when `JWT_SECRET` is not set. Only suitable for development.
pub const DEV_JWT_SECRET: &str = "quicknotes-dev-secret";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Cache TTL in seconds (default: 300)
    pub cache_ttl_seconds: u64,
    /// Maximum number of cache entries (default: 10,000)
    pub cache_max_entries: usize,
    /// Path to SQLite database file (default: "quicknotes.db")
    /// Note: Only used when the `sqlite` feature is enabled.
    #[allow(dead_code)]
    pub sqlite_path: String,
    /// Redis connection URL (default: "redis://localhost:6379")
    /// Note: Only used when the `redis` feature is enabled.
    #[allow(dead_code)]
    pub redis_url: String,
    /// HS256 secret for bearer tokens
    pub jwt_secret: String,
    /// Lifetime of issued tokens in seconds (default: 86,400)
    pub token_ttl_seconds: u64,
    /// Request timeout in seconds (default: 10)
    pub request_timeout_seconds: u64,
    /// Whether the server may run with `DEV_JWT_SECRET` (default: false)
    pub allow_dev_secret: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CACHE_TTL_SECONDS` - Cache TTL in seconds (default: 300)
    /// - `CACHE_MAX_ENTRIES` - Maximum cache entries (default: 10,000)
    /// - `SQLITE_PATH` - SQLite database path (default: "quicknotes.db")
    /// - `REDIS_URL` - Redis connection URL (default: "redis://localhost:6379")
    /// - `JWT_SECRET` - Token signing secret (default: development secret)
    /// - `TOKEN_TTL_SECONDS` - Token lifetime (default: 86,400)
    /// - `REQUEST_TIMEOUT_SECONDS` - Request timeout (default: 10)
    /// - `QUICKNOTES_DEV` - `1` or `true` lets the server use the development secret
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let parsed = |key: &str, default: u64| {
            lookup(key)
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(default)
        };

        Self {
            cache_ttl_seconds: parsed("CACHE_TTL_SECONDS", 300),
            cache_max_entries: lookup("CACHE_MAX_ENTRIES")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(10_000),
            sqlite_path: lookup("SQLITE_PATH").unwrap_or_else(|| "quicknotes.db".to_string()),
            redis_url: lookup("REDIS_URL")
                .unwrap_or_else(|| "redis://localhost:6379".to_string()),
            jwt_secret: lookup("JWT_SECRET")
                .filter(|secret| !secret.is_empty())
                .unwrap_or_else(|| DEV_JWT_SECRET.to_string()),
            token_ttl_seconds: parsed("TOKEN_TTL_SECONDS", 86_400),
            request_timeout_seconds: parsed("REQUEST_TIMEOUT_SECONDS", 10),
            allow_dev_secret: lookup("QUICKNOTES_DEV").is_some_and(|v| {
                let v = v.trim();
                v == "1" || v.eq_ignore_ascii_case("true")
            }),
        }
    }

    /// Get cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }

    pub fn token_ttl(&self) -> Duration {
        Duration::from_secs(self.token_ttl_seconds)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    /// Whether the token secret is the built-in development one.
    pub fn uses_dev_secret(&self) -> bool {
        self.jwt_secret == DEV_JWT_SECRET
    }

    /// Checks that the server may accept requests with this configuration.
    ///
    /// # Errors
    ///
    /// Fails when `JWT_SECRET` is unset and the development secret was not
    /// explicitly allowed, since anyone can sign tokens with it.
    pub fn validate_for_serving(&self) -> anyhow::Result<()> {
        if self.uses_dev_secret() && !self.allow_dev_secret {
            anyhow::bail!(
                "JWT_SECRET is not set; set it, or pass --insecure-dev-secret (QUICKNOTES_DEV=1) to use the development secret"
            );
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
