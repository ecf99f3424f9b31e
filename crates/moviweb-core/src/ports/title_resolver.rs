//! Title-resolution provider port.
//!
//! The provider answers two kinds of queries: an exact lookup that yields
//! one canonical record, and a fuzzy lookup that yields candidate titles.
//! Adapters decode the provider's response once into the variants below;
//! transport failures are reported on the `Err` side and are never confused
//! with a response-level "not found".

use async_trait::async_trait;
use thiserror::Error;

/// Canonical record returned by an exact lookup.
///
/// Optional fields are `None` when the provider omitted them or reported
/// them as unavailable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleRecord {
    pub title: String,
    pub year: Option<String>,
    pub director: Option<String>,
    pub genre: Option<String>,
    pub poster_url: Option<String>,
}

/// Decoded result of an exact-title lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleLookup {
    /// The provider resolved the title.
    Found(TitleRecord),
    /// The provider answered but has no such title.
    NotFound {
        /// Human-readable reason supplied by the provider.
        reason: String,
    },
}

/// Decoded result of a fuzzy-title lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionLookup {
    /// Candidate titles in provider order.
    Matches(Vec<String>),
    /// The provider answered with a negative marker.
    NoMatches {
        /// Human-readable reason supplied by the provider.
        reason: String,
    },
}

/// Transport-level failures talking to the provider.
///
/// Implementation-specific errors (HTTP, JSON) are mapped to these.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The request did not complete within the configured timeout.
    #[error("Request timed out: {message}")]
    Timeout {
        /// Description of the timed-out request
        message: String,
    },

    /// Network or connectivity error (DNS, refused connection, TLS).
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
    },

    /// The provider answered with a non-success HTTP status.
    #[error("Provider returned HTTP status {status}")]
    Status {
        /// HTTP status code
        status: u16,
    },

    /// The provider's response body could not be decoded.
    #[error("Invalid provider response: {message}")]
    InvalidResponse {
        /// What was invalid
        message: String,
    },
}

/// Result type alias for provider port operations.
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Port for the external title-resolution provider.
#[async_trait]
pub trait TitleResolverPort: Send + Sync {
    /// Look up a single canonical record by exact title.
    async fn lookup_exact(&self, title: &str) -> ProviderResult<TitleLookup>;

    /// Look up candidate titles approximately matching `title`.
    async fn lookup_fuzzy(&self, title: &str) -> ProviderResult<SuggestionLookup>;
}
