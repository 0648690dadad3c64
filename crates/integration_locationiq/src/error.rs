//! LocationIQ error types

use thiserror::Error;

/// Errors that can occur while talking to LocationIQ
#[derive(Debug, Error)]
pub enum LocationIqError {
    /// Connection to the geocoding service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request returned a non-success status
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to decode the response body
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded, retry after {retry_after_secs:?} seconds")]
    RateLimitExceeded {
        /// Seconds to wait before retrying (if provided by API)
        retry_after_secs: Option<u64>,
    },

    /// A lookup returned no element
    #[error("No location found for {0}")]
    NotFound(String),

    /// The query was rejected before sending
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

impl LocationIqError {
    /// Returns true if the same request may succeed later
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_) | Self::Timeout { .. } | Self::RateLimitExceeded { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_errors() {
        assert!(LocationIqError::ConnectionFailed("test".to_string()).is_retryable());
        assert!(LocationIqError::Timeout { timeout_secs: 10 }.is_retryable());
        assert!(
            LocationIqError::RateLimitExceeded {
                retry_after_secs: Some(1)
            }
            .is_retryable()
        );
    }

    #[test]
    fn test_non_retryable_errors() {
        assert!(!LocationIqError::RequestFailed("HTTP 401".to_string()).is_retryable());
        assert!(!LocationIqError::ParseError("test".to_string()).is_retryable());
        assert!(!LocationIqError::NotFound("N1".to_string()).is_retryable());
        assert!(!LocationIqError::InvalidQuery("empty".to_string()).is_retryable());
        assert!(!LocationIqError::ConfigurationError("test".to_string()).is_retryable());
    }

    #[test]
    fn test_error_display() {
        let err = LocationIqError::NotFound("R62".to_string());
        assert!(err.to_string().contains("R62"));

        let err = LocationIqError::RateLimitExceeded {
            retry_after_secs: Some(60),
        };
        assert!(err.to_string().contains("60"));

        let err = LocationIqError::Timeout { timeout_secs: 10 };
        assert!(err.to_string().contains("10"));
    }
}
