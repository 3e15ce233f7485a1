mod error;
mod operations;
mod requests;
mod types;

pub use error::NoteError;
pub use operations::{
    filter_notes_by_exact_tags, matches_exact_tags, matches_tag_substrings, normalize_tag_filter,
    parse_tags_query, sort_by_recency, validate_note,
};
pub use requests::{CreateNoteRequest, ListNotesQuery, UpdateNoteRequest};
pub use types::{now, Note, User};
