//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use quicknotes_core::note::{matches_tag_substrings, sort_by_recency, Note};
use quicknotes_core::storage::{NoteRepository, RepositoryError, Result};

/// In-memory note storage.
///
/// Applies the same owner scoping, substring tag filter and recency ordering
/// as the SQLite backend.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    notes: Arc<RwLock<HashMap<Uuid, Note>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NoteRepository for InMemoryRepository {
    async fn get_note(&self, id: Uuid, owner_id: Uuid) -> Result<Option<Note>> {
        let notes = self.notes.read().await;
        Ok(notes
            .get(&id)
            .filter(|note| note.is_owned_by(owner_id))
            .cloned())
    }

    async fn get_notes_by_owner(&self, owner_id: Uuid, tags: &[String]) -> Result<Vec<Note>> {
        let notes = self.notes.read().await;
        let mut found: Vec<Note> = notes
            .values()
            .filter(|note| note.is_owned_by(owner_id) && matches_tag_substrings(note, tags))
            .cloned()
            .collect();
        sort_by_recency(&mut found);
        Ok(found)
    }

    async fn create_note(&self, note: &Note) -> Result<()> {
        let mut notes = self.notes.write().await;
        if notes.contains_key(&note.id) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Note",
                id: note.id.to_string(),
            });
        }
        notes.insert(note.id, note.clone());
        Ok(())
    }

    async fn update_note(&self, note: &Note) -> Result<()> {
        let mut notes = self.notes.write().await;
        match notes.get_mut(&note.id) {
            Some(stored) => {
                *stored = note.clone();
                Ok(())
            }
            None => Err(RepositoryError::note_not_found(note.id)),
        }
    }

    async fn delete_note(&self, id: Uuid) -> Result<()> {
        let mut notes = self.notes.write().await;
        if notes.remove(&id).is_none() {
            return Err(RepositoryError::note_not_found(id));
        }
        Ok(())
    }
}
