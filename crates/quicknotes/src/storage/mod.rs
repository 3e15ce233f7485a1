//! Storage backend implementations.
//!
//! Concrete implementations of [`quicknotes_core::storage::NoteRepository`],
//! selected at compile time via feature flags:
//!
//! - `sqlite` (default): SQLite via `rusqlite` and `tokio-rusqlite`
//! - `inmemory`: `HashMap` storage, nothing persisted
//!
//! The features are mutually exclusive.
//!
//! ```bash
//! cargo build -p quicknotes --no-default-features --features inmemory,memory
//! ```

#[cfg(all(feature = "sqlite", feature = "inmemory"))]
compile_error!(
    "Features 'sqlite' and 'inmemory' are mutually exclusive. \
    Enable only one storage backend at a time."
);

#[cfg(not(any(feature = "sqlite", feature = "inmemory")))]
compile_error!(
    "No storage backend selected. Enable 'sqlite' or 'inmemory' feature. \
    Example: cargo build -p quicknotes --features sqlite"
);

#[cfg(feature = "sqlite")]
pub mod sqlite;

// The in-memory backend also backs the service and router tests.
#[cfg(any(test, feature = "inmemory"))]
pub mod inmemory;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteRepository;

#[cfg(any(test, feature = "inmemory"))]
pub use inmemory::InMemoryRepository;
