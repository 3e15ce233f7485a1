//! Client error types.

use thiserror::Error;

/// Result type alias for client module.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
///
/// Server messages are the plain-text bodies the API sends with error statuses.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// 401: the token is missing, expired or signed with another secret.
    #[error("Not authorized: {0}")]
    Unauthorized(String),

    /// 404: the note does not exist or belongs to another user.
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Server returned {status}: {message}")]
    ServerError { status: u16, message: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
