//! API request types for note operations.
//!
//! These types are shared between the server and client for type-safe API communication.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::NoteError;
use super::operations::parse_tags_query;
use super::types::Note;

/// Request payload for creating a new note.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNoteRequest {
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl CreateNoteRequest {
    /// Create a new request with a title and content.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            tags: None,
        }
    }

    /// Set the note tags.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Checks that title and content are present.
    pub fn validate(&self) -> Result<(), NoteError> {
        if self.title.trim().is_empty() {
            return Err(NoteError::EmptyTitle);
        }
        if self.content.trim().is_empty() {
            return Err(NoteError::EmptyContent);
        }
        Ok(())
    }

    /// Convert into a Note owned by `user_id`. Missing tags become an empty list.
    pub fn into_note(self, user_id: Uuid) -> Note {
        Note::new(user_id, self.title, self.content).with_tags(self.tags.unwrap_or_default())
    }
}

/// Request payload for a partial note update.
///
/// Only the fields that are present replace the corresponding note fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateNoteRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl UpdateNoteRequest {
    /// Create an empty update request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the note title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the note content.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Replace the note tags.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Returns true if no field would change.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.tags.is_none()
    }

    /// Provided fields follow the same rules as on creation.
    pub fn validate(&self) -> Result<(), NoteError> {
        if self.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(NoteError::EmptyTitle);
        }
        if self.content.as_deref().is_some_and(|c| c.trim().is_empty()) {
            return Err(NoteError::EmptyContent);
        }
        Ok(())
    }

    /// Apply updates to an existing note. Timestamps are left untouched.
    pub fn apply_to(self, note: &mut Note) {
        if let Some(title) = self.title {
            note.title = title;
        }
        if let Some(content) = self.content {
            note.content = content;
        }
        if let Some(tags) = self.tags {
            note.tags = tags;
        }
    }
}

/// Query parameters for listing notes (`?tags=a,b,c`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListNotesQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
}

impl ListNotesQuery {
    /// Builds a query from a list of tags. An empty list means no filter.
    pub fn from_tags(tags: &[String]) -> Self {
        if tags.is_empty() {
            return Self::default();
        }
        Self {
            tags: Some(tags.join(",")),
        }
    }

    /// Returns the parsed tag filter, or `None` when no usable tag was given.
    pub fn tag_filter(&self) -> Option<Vec<String>> {
        let tags = parse_tags_query(self.tags.as_deref()?);
        (!tags.is_empty()).then_some(tags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_validate() {
        assert!(CreateNoteRequest::new("T", "C").validate().is_ok());
        assert_eq!(
            CreateNoteRequest::new("  ", "C").validate(),
            Err(NoteError::EmptyTitle)
        );
        assert_eq!(
            CreateNoteRequest::new("T", "").validate(),
            Err(NoteError::EmptyContent)
        );
    }

    #[test]
    fn test_create_request_into_note_defaults_tags() {
        let owner = Uuid::new_v4();
        let note = CreateNoteRequest::new("T", "C").into_note(owner);

        assert_eq!(note.user_id, owner);
        assert_eq!(note.title, "T");
        assert_eq!(note.content, "C");
        assert!(note.tags.is_empty());
    }

    #[test]
    fn test_create_request_into_note_keeps_tags() {
        let note = CreateNoteRequest::new("T", "C")
            .with_tags(["x", "y"])
            .into_note(Uuid::new_v4());
        assert_eq!(note.tags, vec!["x", "y"]);
    }

    #[test]
    fn test_create_request_deserialize_without_tags() {
        let request: CreateNoteRequest =
            serde_json::from_str(r#"{"title":"T","content":"C"}"#).unwrap();
        assert!(request.tags.is_none());
    }

    #[test]
    fn test_update_request_apply_partial() {
        let mut note = Note::new(Uuid::new_v4(), "Old", "Body").with_tags(["a", "b"]);

        UpdateNoteRequest::new().with_title("New").apply_to(&mut note);

        assert_eq!(note.title, "New");
        assert_eq!(note.content, "Body");
        assert_eq!(note.tags, vec!["a", "b"]);
    }

    #[test]
    fn test_update_request_apply_all_fields() {
        let mut note = Note::new(Uuid::new_v4(), "Old", "Body").with_tags(["a"]);

        UpdateNoteRequest::new()
            .with_title("New")
            .with_content("Other")
            .with_tags(Vec::<String>::new())
            .apply_to(&mut note);

        assert_eq!(note.title, "New");
        assert_eq!(note.content, "Other");
        assert!(note.tags.is_empty());
    }

    #[test]
    fn test_update_request_validate() {
        assert!(UpdateNoteRequest::new().validate().is_ok());
        assert_eq!(
            UpdateNoteRequest::new().with_title("").validate(),
            Err(NoteError::EmptyTitle)
        );
        assert_eq!(
            UpdateNoteRequest::new().with_content(" ").validate(),
            Err(NoteError::EmptyContent)
        );
    }

    #[test]
    fn test_update_request_serializes_only_present_fields() {
        let json = serde_json::to_string(&UpdateNoteRequest::new().with_title("x")).unwrap();
        assert_eq!(json, r#"{"title":"x"}"#);
        assert!(UpdateNoteRequest::new().is_empty());
    }

    #[test]
    fn test_list_query_tag_filter() {
        let query = ListNotesQuery {
            tags: Some(" work , urgent".to_string()),
        };
        assert_eq!(
            query.tag_filter(),
            Some(vec!["work".to_string(), "urgent".to_string()])
        );

        assert_eq!(ListNotesQuery::default().tag_filter(), None);
        let blank = ListNotesQuery {
            tags: Some(" , ".to_string()),
        };
        assert_eq!(blank.tag_filter(), None);
    }

    #[test]
    fn test_list_query_from_tags() {
        let query = ListNotesQuery::from_tags(&["a".to_string(), "b".to_string()]);
        assert_eq!(query.tags.as_deref(), Some("a,b"));
        assert!(ListNotesQuery::from_tags(&[]).tags.is_none());
    }
}
