//! Error types for the Playlist Manager client.

use playlist_core::ValidationError;
use thiserror::Error;

/// Errors that can occur when calling the Playlist Manager API.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Call arguments were rejected before any request was sent
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// HTTP request failed (connection refused, DNS, TLS, ...)
    #[error("HTTP request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// Request exceeded the configured timeout
    #[error("Request timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    /// Server returned a non-2xx response
    #[error("{message}")]
    Server {
        status: u16,
        /// Error body sent by the server, when there was one
        data: Option<serde_json::Value>,
        message: String,
    },

    /// Failed to parse a successful response body
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Invalid base URL or resource path
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// Server-provided error payload, if the failure carried one
    pub fn payload(&self) -> Option<&serde_json::Value> {
        match self {
            ClientError::Server { data, .. } => data.as_ref(),
            _ => None,
        }
    }

    /// HTTP status of a server error
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the call never left the client
    pub fn is_validation(&self) -> bool {
        matches!(self, ClientError::Validation(_))
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Timeout(err)
        } else {
            ClientError::Request(err)
        }
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
