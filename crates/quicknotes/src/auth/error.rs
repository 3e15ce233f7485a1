use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Authentication failures.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Missing authorization header")]
    MissingAuthHeader,

    #[error("Invalid authorization header format")]
    InvalidAuthFormat,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Token encoding failed: {0}")]
    Encoding(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = match &self {
            AuthError::MissingAuthHeader
            | AuthError::InvalidAuthFormat
            | AuthError::InvalidToken(_) => {
                tracing::debug!(error = %self, "Rejected request");
                StatusCode::UNAUTHORIZED
            }
            AuthError::Encoding(_) => {
                tracing::error!(error = %self, "Auth error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, self.to_string()).into_response()
    }
}
