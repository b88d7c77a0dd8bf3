//! Custom error types for the application.
//!
//! - [`ApiError`] - Non-success responses and malformed envelopes from the API
//! - [`FetchError`] - Everything that can go wrong issuing a request, HTTP or not

use thiserror::Error;

/// Message used when an error response carries no usable `message` field.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

/// Message used when a success response is not a `{data}` envelope.
pub const PARSE_ERROR_MESSAGE: &str = "Failed to parse response";

/// Structured error from the API: the HTTP status plus a display message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    pub status: u16,
}

impl ApiError {
    pub fn new(message: impl Into<String>, status: u16) -> Self {
        Self {
            message: message.into(),
            status,
        }
    }

    /// Error with the generic message, for bodies that could not be read.
    pub fn generic(status: u16) -> Self {
        Self::new(GENERIC_ERROR_MESSAGE, status)
    }
}

/// Request failures.
///
/// [`FetchError::Api`] means the server answered; every other variant means
/// no usable HTTP response was obtained.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Server returned an error status or a malformed envelope
    #[error(transparent)]
    Api(#[from] ApiError),
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, offline, etc.)
    #[error("Network error: {0}")]
    Network(String),
    /// Request timed out
    #[error("Request timed out")]
    Timeout,
}

impl FetchError {
    /// HTTP status when the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api(err) => Some(err.status),
            _ => None,
        }
    }

    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = ApiError::new("Session expired", 401);
        assert_eq!(err.to_string(), "Session expired");
        assert_eq!(ApiError::generic(500).message, GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn test_fetch_error_status() {
        let err: FetchError = ApiError::new("Not found", 404).into();
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.to_string(), "Not found");
        assert_eq!(FetchError::Timeout.status(), None);
        assert!(FetchError::Network("offline".into()).as_api().is_none());
    }
}
