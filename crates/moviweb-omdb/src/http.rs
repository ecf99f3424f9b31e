//! HTTP backend abstraction for the OMDb API.
//!
//! This module provides a trait-based HTTP backend that allows for
//! dependency injection and easy testing. The production implementation
//! uses reqwest with a per-request timeout and no retries.

use crate::config::ConfigError;
use crate::error::{OmdbError, OmdbResult};
use crate::url::redact;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that can fetch JSON from URLs.
///
/// This is an implementation detail - external code should use the
/// `TitleResolverPort` trait.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Fetch JSON from a URL and deserialize it.
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> OmdbResult<T>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
///
/// A request that exceeds the timeout fails with `OmdbError::Timeout`;
/// it is not retried.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a new reqwest backend.
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| ConfigError::HttpClient {
                message: e.to_string(),
            })?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> OmdbResult<T> {
        let safe_url = redact(url);
        tracing::debug!(url = %safe_url, "OMDb request");

        let response = self
            .client
            .get(url.as_str())
            .send()
            .await
            .map_err(|e| OmdbError::from_reqwest(e, &safe_url))?;

        let status = response.status();
        if !status.is_success() {
            return Err(OmdbError::ApiRequestFailed {
                status: status.as_u16(),
                url: safe_url,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| OmdbError::from_reqwest(e, &safe_url))?;
        Ok(serde_json::from_slice(&body)?)
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
