//! Internal error types for OMDb operations.
//!
//! These errors are internal to `moviweb-omdb` and are mapped to the core
//! `ProviderError` at the port boundary. URLs stored here are already
//! redacted.

use thiserror::Error;

/// Result type alias for OMDb operations.
pub type OmdbResult<T> = Result<T, OmdbError>;

/// Errors related to OMDb API requests.
#[derive(Debug, Error)]
pub enum OmdbError {
    /// API request failed with a non-success HTTP status.
    #[error("OMDb request failed with status {status}: {url}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// The (redacted) URL that was requested
        url: String,
    },

    /// The request did not complete within the configured timeout.
    #[error("OMDb request timed out: {url}")]
    Timeout {
        /// The (redacted) URL that was requested
        url: String,
    },

    /// API returned a body that does not match the OMDb envelope.
    #[error("Invalid response from OMDb: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl OmdbError {
    /// Classify a reqwest error, separating timeouts from other failures.
    pub(crate) fn from_reqwest(err: reqwest::Error, url: &str) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                url: url.to_string(),
            }
        } else if err.is_decode() {
            Self::InvalidResponse {
                message: err.to_string(),
            }
        } else {
            // reqwest embeds the request URL, which carries the API key
            Self::Network(err.without_url())
        }
    }
}
