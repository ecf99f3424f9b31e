//! Catalog error taxonomy.
//!
//! Every variant is an expected outcome that callers display; none of them
//! indicates a bug. Adapters map this to their own error types (CLI exit
//! codes, JSON outcomes).

use thiserror::Error;

use crate::ports::{ProviderError, RepositoryError};

/// Errors returned by `CatalogService` operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Input was empty or blank; detected before any I/O.
    #[error("{0}")]
    Validation(String),

    /// The provider has no record for the title.
    #[error("Movie '{title}' not found: {reason}")]
    TitleNotFound {
        /// Trimmed title that was looked up
        title: String,
        /// Reason reported by the provider
        reason: String,
        /// Best-effort alternatives, possibly empty
        suggestions: Vec<String>,
    },

    /// The provider could not be reached or answered garbage.
    #[error("Movie lookup service unavailable: {0}")]
    ProviderUnavailable(String),

    /// Persistence failed and the transaction was rolled back.
    #[error("Storage error: {0}")]
    Storage(String),

    /// A referenced entity does not exist.
    #[error("Not found: {0}")]
    EntityNotFound(String),
}

impl CatalogError {
    /// Suggestions attached to a title-not-found outcome.
    pub fn suggestions(&self) -> Option<&[String]> {
        match self {
            Self::TitleNotFound { suggestions, .. } => Some(suggestions),
            _ => None,
        }
    }
}

impl From<RepositoryError> for CatalogError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(what) => Self::EntityNotFound(what),
            RepositoryError::Storage(msg) | RepositoryError::Constraint(msg) => Self::Storage(msg),
        }
    }
}

impl From<ProviderError> for CatalogError {
    fn from(err: ProviderError) -> Self {
        Self::ProviderUnavailable(err.to_string())
    }
}
