use thiserror::Error;

/// Errors that can occur when validating a note.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NoteError {
    #[error("Note title cannot be empty")]
    EmptyTitle,
    #[error("Note content cannot be empty")]
    EmptyContent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_error_display() {
        assert_eq!(
            NoteError::EmptyTitle.to_string(),
            "Note title cannot be empty"
        );
        assert_eq!(
            NoteError::EmptyContent.to_string(),
            "Note content cannot be empty"
        );
    }
}
