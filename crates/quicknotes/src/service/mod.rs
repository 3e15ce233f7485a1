//! Application services sitting between the HTTP handlers and storage.

mod error;
mod notes;

pub use error::{Result, ServiceError};
pub use notes::NotesService;
