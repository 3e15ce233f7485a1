//! Note API operations.

use async_trait::async_trait;
use uuid::Uuid;

use quicknotes_core::note::{CreateNoteRequest, ListNotesQuery, Note, UpdateNoteRequest};

use super::NotesClient;
use crate::error::Result;
use crate::store::NotesApi;

impl NotesClient {
    /// List notes, optionally narrowed server-side by tag substrings.
    pub async fn list_notes(&self, tags: &[String]) -> Result<Vec<Note>> {
        let query = ListNotesQuery::from_tags(tags);
        let response = self
            .authorized(self.client.get(self.url("/notes")))
            .query(&query)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Get note by ID.
    pub async fn get_note(&self, id: Uuid) -> Result<Note> {
        let response = self
            .authorized(self.client.get(self.url(&format!("/notes/{}", id))))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Create a new note.
    pub async fn create_note(&self, req: &CreateNoteRequest) -> Result<Note> {
        let response = self
            .authorized(self.client.post(self.url("/notes")))
            .json(req)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Update a note. Only the fields set in `req` change.
    pub async fn update_note(&self, id: Uuid, req: &UpdateNoteRequest) -> Result<Note> {
        let response = self
            .authorized(self.client.patch(self.url(&format!("/notes/{}", id))))
            .json(req)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Delete note by ID.
    pub async fn delete_note(&self, id: Uuid) -> Result<()> {
        let response = self
            .authorized(self.client.delete(self.url(&format!("/notes/{}", id))))
            .send()
            .await?;
        self.handle_empty_response(response).await
    }
}

#[async_trait]
impl NotesApi for NotesClient {
    async fn list(&self, tags: &[String]) -> Result<Vec<Note>> {
        self.list_notes(tags).await
    }

    async fn create(&self, req: &CreateNoteRequest) -> Result<Note> {
        self.create_note(req).await
    }

    async fn update(&self, id: Uuid, req: &UpdateNoteRequest) -> Result<Note> {
        self.update_note(id, req).await
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        self.delete_note(id).await
    }
}
