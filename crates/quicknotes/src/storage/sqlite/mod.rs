//! SQLite storage backend.
//!
//! `rusqlite` does the work on a dedicated thread owned by `tokio-rusqlite`,
//! which also serializes every statement against the single connection.

mod conversions;
mod error;
mod repository;
mod schema;

pub use repository::SqliteRepository;
