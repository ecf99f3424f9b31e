//! Port trait implementation for `OmdbClient`.
//!
//! This module implements the core-owned `TitleResolverPort` trait for
//! `OmdbClient`, mapping internal errors to `ProviderError`.

use async_trait::async_trait;
use moviweb_core::ports::{ProviderError, ProviderResult, SuggestionLookup, TitleLookup};
use moviweb_core::TitleResolverPort;

use crate::client::OmdbClient;
use crate::error::OmdbError;
use crate::http::HttpBackend;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `OmdbError` to core `ProviderError`.
fn map_error(err: OmdbError) -> ProviderError {
    match err {
        OmdbError::ApiRequestFailed { status, .. } => ProviderError::Status { status },
        OmdbError::Timeout { url } => ProviderError::Timeout { message: url },
        OmdbError::InvalidResponse { message } => ProviderError::InvalidResponse { message },
        OmdbError::Network(e) => ProviderError::Network {
            message: e.to_string(),
        },
        OmdbError::JsonParse(e) => ProviderError::InvalidResponse {
            message: e.to_string(),
        },
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend + Send + Sync> TitleResolverPort for OmdbClient<B> {
    async fn lookup_exact(&self, title: &str) -> ProviderResult<TitleLookup> {
        self.fetch_title(title).await.map_err(map_error)
    }

    async fn lookup_fuzzy(&self, title: &str) -> ProviderResult<SuggestionLookup> {
        self.search_titles(title).await.map_err(map_error)
    }
}
