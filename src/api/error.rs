/// Error types for the permissions API client
use thiserror::Error;

/// Errors surfaced by API operations. Failures are forwarded to the
/// caller unchanged; there is no retry or local recovery.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure before any HTTP status was received
    #[error("Network error: {message}")]
    Network {
        /// Human-readable description from the transport
        message: String,
    },

    /// The server answered with a non-2xx status; the body is ignored
    #[error("HTTP {status}: {status_text}")]
    Http {
        /// Numeric HTTP status code
        status: u16,
        /// Status text reported alongside the code
        status_text: String,
    },

    /// The response body could not be decoded as the expected shape
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Numeric status code carried by this error. Failures that never
    /// produced an HTTP status report 0, the code the transport assigns
    /// when the network itself failed.
    pub fn status(&self) -> u16 {
        match self {
            ApiError::Http { status, .. } => *status,
            ApiError::Network { .. } | ApiError::Decode(_) => 0,
        }
    }

    /// Status text carried by this error.
    pub fn status_text(&self) -> &str {
        match self {
            ApiError::Http { status_text, .. } => status_text,
            ApiError::Network { message } => message,
            ApiError::Decode(msg) => msg,
        }
    }
}
