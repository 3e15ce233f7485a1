//! Cache backend implementations.
//!
//! Concrete implementations of [`quicknotes_core::cache::Cache`], selected at
//! compile time via feature flags:
//!
//! - `memory` (default): in-process LRU cache
//! - `redis`: Redis cache using the redis crate
//!
//! The features are mutually exclusive.

#[cfg(all(feature = "memory", feature = "redis"))]
compile_error!(
    "Features 'memory' and 'redis' are mutually exclusive. \
    Enable only one cache backend at a time."
);

#[cfg(not(any(feature = "memory", feature = "redis")))]
compile_error!(
    "No cache backend selected. Enable 'memory' or 'redis' feature. \
    Example: cargo build -p quicknotes --features memory"
);

// The memory backend also backs the router tests regardless of the feature set.
#[cfg(any(test, feature = "memory"))]
pub mod memory;

#[cfg(feature = "redis")]
pub mod redis_impl;
