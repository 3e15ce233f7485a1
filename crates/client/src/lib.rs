//! quicknotes_client - API client, note store and CLI for QuickNotes.

pub mod cli;
pub mod client;
pub mod error;
pub mod output;
pub mod store;

pub use client::NotesClient;
pub use error::{ClientError, Result};
pub use store::{EmptyState, NoteStore, NotesApi};
