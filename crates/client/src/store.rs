//! Client-side note store.
//!
//! Holds the notes last fetched from the server together with the active
//! search tags. The visible view applies the search tags as an exact,
//! all-of membership filter on top of whatever the server returned. The
//! server itself matches tag substrings, so the two filters can disagree
//! and the view is the stricter one.
//!
//! Every mutation reloads the list, passing the search tags to the server
//! when there are any.

use async_trait::async_trait;
use uuid::Uuid;

use quicknotes_core::note::{filter_notes_by_exact_tags, CreateNoteRequest, Note, UpdateNoteRequest};

use crate::error::Result;

/// The note operations the store needs from the API.
#[async_trait]
pub trait NotesApi: Send + Sync {
    async fn list(&self, tags: &[String]) -> Result<Vec<Note>>;
    async fn create(&self, req: &CreateNoteRequest) -> Result<Note>;
    async fn update(&self, id: Uuid, req: &UpdateNoteRequest) -> Result<Note>;
    async fn delete(&self, id: Uuid) -> Result<()>;
}

/// Why the visible view is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// The user has no notes at all.
    NoNotes,
    /// Notes exist but none carries every search tag.
    NoMatches,
}

impl EmptyState {
    pub fn title(&self) -> &'static str {
        match self {
            EmptyState::NoNotes => "No notes yet",
            EmptyState::NoMatches => "No notes match your filters",
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            EmptyState::NoNotes => "Create your first note to get started!",
            EmptyState::NoMatches => "Try adjusting your tag filters",
        }
    }
}

/// Loaded notes plus the active search tags.
pub struct NoteStore<A> {
    api: A,
    notes: Vec<Note>,
    search_tags: Vec<String>,
}

impl<A: NotesApi> NoteStore<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            notes: Vec::new(),
            search_tags: Vec::new(),
        }
    }

    /// Notes as last returned by the server.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn search_tags(&self) -> &[String] {
        &self.search_tags
    }

    /// Adds a search tag. Returns false for blank or already active tags.
    pub fn add_search_tag(&mut self, input: &str) -> bool {
        let tag = input.trim();
        if tag.is_empty() || self.search_tags.iter().any(|t| t == tag) {
            return false;
        }
        self.search_tags.push(tag.to_string());
        true
    }

    /// Removes a search tag. Returns false if it was not active.
    pub fn remove_search_tag(&mut self, tag: &str) -> bool {
        let before = self.search_tags.len();
        self.search_tags.retain(|t| t != tag);
        self.search_tags.len() != before
    }

    /// Fetches notes, narrowed server-side by `tags` when non-empty.
    pub async fn load(&mut self, tags: &[String]) -> Result<()> {
        self.notes = self.api.list(tags).await?;
        Ok(())
    }

    /// Reloads with the active search tags.
    pub async fn reload(&mut self) -> Result<()> {
        let tags = self.search_tags.clone();
        self.load(&tags).await
    }

    /// Loaded notes carrying every search tag exactly.
    pub fn visible(&self) -> Vec<&Note> {
        filter_notes_by_exact_tags(&self.notes, &self.search_tags)
    }

    /// Why nothing is visible, if nothing is.
    pub fn empty_state(&self) -> Option<EmptyState> {
        if self.notes.is_empty() {
            Some(EmptyState::NoNotes)
        } else if self.visible().is_empty() {
            Some(EmptyState::NoMatches)
        } else {
            None
        }
    }

    pub async fn create(&mut self, req: &CreateNoteRequest) -> Result<Note> {
        let note = self.api.create(req).await?;
        self.reload().await?;
        Ok(note)
    }

    pub async fn update(&mut self, id: Uuid, req: &UpdateNoteRequest) -> Result<Note> {
        let note = self.api.update(id, req).await?;
        self.reload().await?;
        Ok(note)
    }

    pub async fn delete(&mut self, id: Uuid) -> Result<()> {
        self.api.delete(id).await?;
        self.reload().await
    }
}
