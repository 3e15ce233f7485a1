//! In-memory storage backend.
//!
//! Keeps notes in a `HashMap` behind `Arc<RwLock<_>>`. Nothing is persisted,
//! which makes it the backend of choice for tests and local experiments.

mod repository;

pub use repository::InMemoryRepository;
