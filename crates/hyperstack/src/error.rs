//! Error types for the Hyperstack client.

use thiserror::Error;

/// Errors that can occur while resolving credentials or talking to the API.
#[derive(Debug, Error)]
pub enum Error {
    /// No usable configuration, e.g. no API key could be resolved.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The API answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the API.
        status: u16,
        /// Message extracted from the response body.
        message: String,
    },

    /// The request never produced an HTTP response.
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// A successful response carried a body that is not JSON.
    #[error("invalid JSON response: {0}")]
    Decode(String),

    /// A resource identifier would not stay a single path segment.
    #[error("invalid identifier {0:?}: must not be empty, '.' or '..'")]
    InvalidIdentifier(String),

    /// A request payload could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for Hyperstack client operations.
pub type Result<T> = std::result::Result<T, Error>;
