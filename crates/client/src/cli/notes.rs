//! Note CLI commands.

use clap::{Parser, Subcommand};
use uuid::Uuid;

use quicknotes_core::note::UpdateNoteRequest;

/// Note management commands.
#[derive(Debug, Parser)]
pub struct NotesCommand {
    #[command(subcommand)]
    pub action: NotesAction,
}

/// Available note actions.
#[derive(Debug, Subcommand)]
pub enum NotesAction {
    /// List notes.
    ///
    /// Tags select notes carrying every tag exactly. With --raw the
    /// server's substring matching is shown instead.
    List {
        /// Filter tag (repeatable).
        #[arg(long)]
        tag: Vec<String>,
        /// Show the server-filtered list without client-side filtering.
        #[arg(long)]
        raw: bool,
    },
    /// Get note by ID.
    Get {
        /// Note ID.
        id: Uuid,
    },
    /// Create a new note.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
        /// Tag (repeatable).
        #[arg(long)]
        tag: Vec<String>,
    },
    /// Update a note. Omitted fields keep their value.
    Update {
        /// Note ID.
        id: Uuid,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
        /// Replacement tag (repeatable).
        #[arg(long, conflicts_with = "clear_tags")]
        tag: Vec<String>,
        /// Remove all tags.
        #[arg(long)]
        clear_tags: bool,
    },
    /// Delete note by ID.
    Delete {
        /// Note ID.
        id: Uuid,
    },
}

/// Builds the update payload from `update` arguments.
pub fn update_request(
    title: Option<String>,
    content: Option<String>,
    tag: Vec<String>,
    clear_tags: bool,
) -> UpdateNoteRequest {
    let tags = if clear_tags {
        Some(Vec::new())
    } else if tag.is_empty() {
        None
    } else {
        Some(tag)
    };

    UpdateNoteRequest {
        title,
        content,
        tags,
    }
}
