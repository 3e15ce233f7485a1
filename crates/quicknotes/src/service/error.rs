use thiserror::Error;
use uuid::Uuid;

use quicknotes_core::note::NoteError;
use quicknotes_core::storage::{repository_error_to_status_code, RepositoryError};

/// Errors returned by the notes service.
///
/// There is no "forbidden" case: every lookup is scoped to the caller, so a
/// note owned by someone else is reported as not found.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] NoteError),
    #[error("Note not found: {0}")]
    NotFound(Uuid),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ServiceError {
    /// HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            ServiceError::Validation(_) => 400,
            ServiceError::NotFound(_) => 404,
            ServiceError::Repository(err) => repository_error_to_status_code(err),
        }
    }
}

/// Result type for service operations.
pub type Result<T> = std::result::Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ServiceError::from(NoteError::EmptyTitle).status_code(), 400);
        assert_eq!(ServiceError::NotFound(Uuid::nil()).status_code(), 404);
        assert_eq!(
            ServiceError::from(RepositoryError::ConnectionFailed("down".to_string()))
                .status_code(),
            503
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            ServiceError::from(NoteError::EmptyContent).to_string(),
            "Note content cannot be empty"
        );
        assert_eq!(
            ServiceError::NotFound(Uuid::nil()).to_string(),
            "Note not found: 00000000-0000-0000-0000-000000000000"
        );
    }
}
