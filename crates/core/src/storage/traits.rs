use async_trait::async_trait;
use uuid::Uuid;

use crate::note::Note;

use super::Result;

/// Persistent store of notes.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Gets a note by ID, scoped to its owner.
    ///
    /// A note that exists but belongs to someone else reads as `None`.
    async fn get_note(&self, id: Uuid, owner_id: Uuid) -> Result<Option<Note>>;

    /// Gets every note of an owner, most recently updated first.
    ///
    /// When `tags` is not empty a note is kept only if each requested tag is a
    /// substring of at least one of its tags.
    async fn get_notes_by_owner(&self, owner_id: Uuid, tags: &[String]) -> Result<Vec<Note>>;

    /// Creates a new note.
    async fn create_note(&self, note: &Note) -> Result<()>;

    /// Saves an existing note, replacing all of its fields.
    async fn update_note(&self, note: &Note) -> Result<()>;

    /// Deletes a note by its ID.
    async fn delete_note(&self, id: Uuid) -> Result<()>;
}
