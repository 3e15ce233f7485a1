//! Notes service.
//!
//! Cache-aside over a [`NoteRepository`]:
//! - **Reads** of an owner's list check the cache first and populate it on miss.
//!   Point lookups always go to the repository.
//! - **Writes** persist first, then drop every cached list of the owner.
//!
//! The cache never fails a request. A cache read error is treated as a miss
//! and write-side cache errors are logged. Lists can therefore be stale for at
//! most the TTL.

use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;

use quicknotes_core::cache::{
    deserialize_notes, notes_key, owner_notes_pattern, serialize_notes, Cache,
};
use quicknotes_core::note::{validate_note, CreateNoteRequest, Note, UpdateNoteRequest};
use quicknotes_core::storage::{NoteRepository, RepositoryError};

use super::{Result, ServiceError};

/// Note CRUD with owner scoping and cached listings.
#[derive(Clone)]
pub struct NotesService {
    repository: Arc<dyn NoteRepository>,
    cache: Arc<dyn Cache>,
    ttl: Duration,
}

impl NotesService {
    /// Creates a new service.
    ///
    /// * `ttl` - lifetime of cached note lists
    pub fn new(repository: Arc<dyn NoteRepository>, cache: Arc<dyn Cache>, ttl: Duration) -> Self {
        Self {
            repository,
            cache,
            ttl,
        }
    }

    /// Creates a note owned by `owner_id`.
    pub async fn create(&self, request: CreateNoteRequest, owner_id: Uuid) -> Result<Note> {
        request.validate()?;
        let note = request.into_note(owner_id);

        self.repository.create_note(&note).await?;
        self.invalidate_owner(owner_id).await;

        tracing::debug!(note_id = %note.id, %owner_id, "Note created");
        Ok(note)
    }

    /// Lists the notes of `owner_id`, most recently updated first.
    ///
    /// With `tags`, only notes whose tags contain every requested tag as a
    /// substring are returned.
    pub async fn find_all(&self, owner_id: Uuid, tags: Option<&[String]>) -> Result<Vec<Note>> {
        let cache_key = notes_key(owner_id, tags);

        if let Some(notes) = self.cached_notes(&cache_key).await {
            tracing::trace!(%owner_id, key = %cache_key, count = notes.len(), "Cache hit for notes");
            return Ok(notes);
        }

        tracing::trace!(%owner_id, key = %cache_key, "Cache miss for notes");
        let notes = self
            .repository
            .get_notes_by_owner(owner_id, tags.unwrap_or_default())
            .await?;

        match serialize_notes(&notes) {
            Ok(bytes) => {
                if let Err(err) = self.cache.set(&cache_key, &bytes, Some(self.ttl)).await {
                    tracing::warn!(%owner_id, error = %err, "Failed to cache notes");
                }
            }
            Err(err) => tracing::warn!(%owner_id, error = %err, "Failed to serialize notes"),
        }

        Ok(notes)
    }

    /// Fetches one note of `owner_id`. Bypasses the cache.
    pub async fn find_one(&self, id: Uuid, owner_id: Uuid) -> Result<Note> {
        self.repository
            .get_note(id, owner_id)
            .await?
            .ok_or(ServiceError::NotFound(id))
    }

    /// Applies a partial update and refreshes `updated_at`.
    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateNoteRequest,
        owner_id: Uuid,
    ) -> Result<Note> {
        request.validate()?;
        let mut note = self.find_one(id, owner_id).await?;

        request.apply_to(&mut note);
        note.touch();
        validate_note(&note)?;

        self.repository
            .update_note(&note)
            .await
            .map_err(|err| not_found_or(err, id))?;
        self.invalidate_owner(owner_id).await;

        tracing::debug!(note_id = %id, %owner_id, "Note updated");
        Ok(note)
    }

    /// Deletes a note of `owner_id`.
    pub async fn remove(&self, id: Uuid, owner_id: Uuid) -> Result<()> {
        let note = self.find_one(id, owner_id).await?;

        self.repository
            .delete_note(note.id)
            .await
            .map_err(|err| not_found_or(err, id))?;
        self.invalidate_owner(owner_id).await;

        tracing::debug!(note_id = %id, %owner_id, "Note deleted");
        Ok(())
    }

    /// Drops every cached note list of `owner_id`.
    pub async fn invalidate_owner(&self, owner_id: Uuid) {
        let pattern = owner_notes_pattern(owner_id);
        if let Err(err) = self.cache.delete_pattern(&pattern).await {
            tracing::warn!(
                %owner_id,
                error = %err,
                outage = err.is_outage(),
                "Failed to invalidate notes cache"
            );
        }
    }

    async fn cached_notes(&self, key: &str) -> Option<Vec<Note>> {
        let bytes = match self.cache.get(key).await {
            Ok(bytes) => bytes?,
            Err(err) => {
                tracing::warn!(
                    key,
                    error = %err,
                    outage = err.is_outage(),
                    "Cache read failed, querying repository"
                );
                return None;
            }
        };

        match deserialize_notes(&bytes) {
            Ok(notes) => Some(notes),
            Err(err) => {
                tracing::warn!(key, error = %err, "Cached notes deserialization failed");
                None
            }
        }
    }
}

/// A note deleted between lookup and write is reported as not found.
fn not_found_or(err: RepositoryError, id: Uuid) -> ServiceError {
    if err.is_not_found() {
        ServiceError::NotFound(id)
    } else {
        ServiceError::Repository(err)
    }
}
