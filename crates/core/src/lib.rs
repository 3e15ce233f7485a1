//! Functional core for QuickNotes.
//!
//! Pure types and functions shared by the server and the client: the note
//! domain, cache key derivation and storage abstractions. Nothing in here
//! performs I/O.

pub mod cache;
pub mod note;
pub mod storage;
