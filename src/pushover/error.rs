//! Error types for HTTP and Pushover API operations.

use thiserror::Error;

/// Error type for HTTP operations.
///
/// Describes what went wrong at the transport level, before any
/// response from the API has been interpreted.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// TLS failures and other network-level errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    #[error("Request timed out")]
    Timeout,

    /// The request could not be built (bad URL or header).
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Error type for sending a notification.
#[derive(Debug, Error)]
pub enum SendError {
    /// The HTTP request itself failed.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The API answered but refused the message.
    ///
    /// Pushover reports `status: 0` together with a list of human-readable
    /// errors, typically alongside a 4xx status code.
    #[error("Pushover rejected the message (HTTP {status}): {}", errors.join("; "))]
    Rejected {
        /// HTTP status code of the response
        status: http::StatusCode,
        /// Error messages reported by the API
        errors: Vec<String>,
    },

    /// The API answered with something that is not a Pushover response.
    #[error("Unexpected response from Pushover (HTTP {status}): {reason}")]
    InvalidResponse {
        /// HTTP status code of the response
        status: http::StatusCode,
        /// Why the body could not be interpreted
        reason: String,
    },
}
