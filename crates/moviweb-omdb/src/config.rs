//! Public configuration for the OMDb client.
//!
//! This module provides a stable public API for configuring the client.
//! The internal config is derived from this.

use std::time::Duration;

use thiserror::Error;

/// Default OMDb endpoint.
pub const DEFAULT_BASE_URL: &str = "https://www.omdbapi.com/";

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "OMDB_API_KEY";

/// Environment variable overriding the endpoint.
pub const BASE_URL_VAR: &str = "OMDB_URL";

/// Errors raised while configuring or constructing the client.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is unset or blank.
    #[error("{name} is not set")]
    MissingVar {
        /// Variable name
        name: &'static str,
    },

    /// The configured base URL cannot be parsed.
    #[error("Invalid OMDb base URL '{url}': {message}")]
    InvalidBaseUrl {
        /// The rejected URL
        url: String,
        /// Parser message
        message: String,
    },

    /// The HTTP client could not be built.
    #[error("Failed to build HTTP client: {message}")]
    HttpClient {
        /// Builder message
        message: String,
    },
}

/// Configuration for the OMDb client.
///
/// Use the builder pattern methods to customize the client configuration.
///
/// # Example
///
/// ```
/// use moviweb_omdb::OmdbClientConfig;
/// use std::time::Duration;
///
/// let config = OmdbClientConfig::new("my-key")
///     .with_timeout(Duration::from_secs(2))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Clone)]
pub struct OmdbClientConfig {
    /// Base URL of the OMDb API
    pub(crate) base_url: String,
    /// API key sent as the `apikey` query parameter
    pub(crate) api_key: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Request timeout
    pub(crate) timeout: Duration,
}

impl std::fmt::Debug for OmdbClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OmdbClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"***")
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl OmdbClientConfig {
    /// Create a configuration with default settings and the given API key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            user_agent: concat!("moviweb-omdb/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(5),
        }
    }

    /// Build a configuration from `OMDB_API_KEY` and `OMDB_URL`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingVar` if `OMDB_API_KEY` is unset or blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a configuration from an arbitrary variable lookup.
    pub(crate) fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let non_blank = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let api_key = non_blank(API_KEY_VAR).ok_or(ConfigError::MissingVar { name: API_KEY_VAR })?;
        let mut config = Self::new(api_key.trim());
        if let Some(url) = non_blank(BASE_URL_VAR) {
            config = config.with_base_url(url.trim());
        }
        Ok(config)
    }

    /// Set the base URL for the OMDb API.
    ///
    /// Defaults to `https://www.omdbapi.com/`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 5 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
