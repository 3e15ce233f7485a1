//! Pure mapping from repository errors to HTTP status codes.

use super::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// - `NotFound` -> 404
/// - `AlreadyExists` -> 409
/// - `ConnectionFailed` -> 503
/// - `QueryFailed`, `Serialization` -> 500
/// - `InvalidData` -> 400
///
/// # Examples
///
/// ```
/// use quicknotes_core::storage::{RepositoryError, repository_error_to_status_code};
///
/// let error = RepositoryError::NotFound {
///     entity_type: "Note",
///     id: "abc-123".to_string(),
/// };
/// assert_eq!(repository_error_to_status_code(&error), 404);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::NotFound { .. } => 404,
        RepositoryError::AlreadyExists { .. } => 409,
        RepositoryError::ConnectionFailed(_) => 503,
        RepositoryError::QueryFailed(_) | RepositoryError::Serialization(_) => 500,
        RepositoryError::InvalidData(_) => 400,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (
                RepositoryError::NotFound {
                    entity_type: "Note",
                    id: "1".to_string(),
                },
                404,
            ),
            (
                RepositoryError::AlreadyExists {
                    entity_type: "Note",
                    id: "1".to_string(),
                },
                409,
            ),
            (RepositoryError::ConnectionFailed("down".to_string()), 503),
            (RepositoryError::QueryFailed("syntax".to_string()), 500),
            (RepositoryError::Serialization("json".to_string()), 500),
            (RepositoryError::InvalidData("uuid".to_string()), 400),
        ];

        for (error, expected) in cases {
            assert_eq!(repository_error_to_status_code(&error), expected, "{error}");
        }
    }
}
