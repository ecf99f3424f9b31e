//! OMDb client for exact title lookups and fuzzy searches.
//!
//! This module provides the main client interface for interacting with
//! the OMDb API.

mod lookup;

use crate::config::{ConfigError, OmdbClientConfig};
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::OmdbConfig;
use url::Url;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default OMDb client using the reqwest HTTP backend.
pub type DefaultOmdbClient = OmdbClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the OMDb API.
///
/// This client is generic over an HTTP backend, allowing for easy testing.
/// Use `DefaultOmdbClient` for production code and interact with it through
/// the `TitleResolverPort` trait.
pub struct OmdbClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: OmdbConfig,
}

impl DefaultOmdbClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client
    /// cannot be built.
    pub fn new(config: &OmdbClientConfig) -> Result<Self, ConfigError> {
        let internal_config = Self::to_internal_config(config)?;
        let backend = ReqwestBackend::new(config.timeout, &config.user_agent)?;
        Ok(Self {
            backend,
            config: internal_config,
        })
    }

    fn to_internal_config(config: &OmdbClientConfig) -> Result<OmdbConfig, ConfigError> {
        let base_url =
            Url::parse(&config.base_url).map_err(|e| ConfigError::InvalidBaseUrl {
                url: config.base_url.clone(),
                message: e.to_string(),
            })?;

        Ok(OmdbConfig {
            base_url,
            api_key: config.api_key.clone(),
        })
    }
}

impl<B: HttpBackend> OmdbClient<B> {
    /// Create a new client with a custom backend.
    ///
    /// Use this for testing with a fake backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(config: OmdbConfig, backend: B) -> Self {
        Self { backend, config }
    }
}
