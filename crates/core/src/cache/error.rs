use thiserror::Error;

/// Cache backend failures.
///
/// Callers treat every variant as a cache miss. None of them should surface
/// to an API client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// The backend could not be reached (refused, dropped or timed out).
    #[error("Cache connection failed: {0}")]
    ConnectionFailed(String),
    /// The backend answered with an error.
    #[error("Cache operation failed: {0}")]
    OperationFailed(String),
}

impl CacheError {
    /// True when retrying later could succeed.
    pub fn is_outage(&self) -> bool {
        matches!(self, CacheError::ConnectionFailed(_))
    }
}

/// Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            CacheError::ConnectionFailed("refused".to_string()).to_string(),
            "Cache connection failed: refused"
        );
        assert_eq!(
            CacheError::OperationFailed("WRONGTYPE".to_string()).to_string(),
            "Cache operation failed: WRONGTYPE"
        );
    }

    #[test]
    fn test_is_outage() {
        assert!(CacheError::ConnectionFailed("refused".to_string()).is_outage());
        assert!(!CacheError::OperationFailed("WRONGTYPE".to_string()).is_outage());
    }
}
