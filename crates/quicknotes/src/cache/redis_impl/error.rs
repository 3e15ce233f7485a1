//! Redis error mapping to CacheError.

use quicknotes_core::cache::CacheError;

/// Maps Redis errors to CacheError.
///
/// Refused, dropped and timed out connections become `ConnectionFailed` so the
/// caller can tell an outage apart from a bad command.
pub fn map_redis_error(err: redis::RedisError) -> CacheError {
    if err.is_connection_refusal() || err.is_timeout() || err.is_connection_dropped() {
        CacheError::ConnectionFailed(err.to_string())
    } else {
        CacheError::OperationFailed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_error_is_operation_failure() {
        let err = redis::RedisError::from((redis::ErrorKind::TypeError, "WRONGTYPE"));
        assert!(matches!(
            map_redis_error(err),
            CacheError::OperationFailed(_)
        ));
    }

    #[test]
    fn test_refused_connection_is_connection_failure() {
        let io = std::io::Error::from(std::io::ErrorKind::ConnectionRefused);
        let err = redis::RedisError::from(io);
        assert!(matches!(
            map_redis_error(err),
            CacheError::ConnectionFailed(_)
        ));
    }
}
