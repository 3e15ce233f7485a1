//! Pure functions for turning note lists into cache bytes and back.
//!
//! Values are stored as JSON, so a cached list is readable with `redis-cli GET`.

use thiserror::Error;

use crate::note::Note;

/// Errors that can occur during cache serialization/deserialization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerializationError {
    /// Failed to serialize a value to bytes.
    #[error("Failed to serialize: {0}")]
    SerializeFailed(String),
    /// Failed to deserialize bytes to a value.
    #[error("Failed to deserialize: {0}")]
    DeserializeFailed(String),
}

/// Result type for serialization operations.
pub type Result<T> = std::result::Result<T, SerializationError>;

/// Serializes a list of notes to JSON bytes.
pub fn serialize_notes(notes: &[Note]) -> Result<Vec<u8>> {
    serde_json::to_vec(notes).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes JSON bytes to a list of notes.
pub fn deserialize_notes(bytes: &[u8]) -> Result<Vec<Note>> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}
