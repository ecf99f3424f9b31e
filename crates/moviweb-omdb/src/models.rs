//! Internal API response types for OMDb.
//!
//! These types are internal to `moviweb-omdb` and are not exposed to consumers.
//! External consumers see the port types defined in `moviweb-core`.

// Search items mirror the full OMDb shape; only the title is consumed today
#![allow(dead_code)]

use serde::Deserialize;
use url::Url;

// ============================================================================
// Configuration (used internally, see config.rs for public config)
// ============================================================================

/// Internal configuration for the OMDb client.
#[derive(Clone)]
pub struct OmdbConfig {
    /// Parsed base URL of the API
    pub base_url: Url,
    /// API key sent with every request
    pub api_key: String,
}

// ============================================================================
// Response Envelopes
// ============================================================================

/// Body returned by an exact-title lookup (`?t=`).
///
/// OMDb always answers with `Response: "True"` or `"False"`; on `"False"`
/// only `Error` is populated.
#[derive(Debug, Deserialize)]
pub struct OmdbTitleResponse {
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Error")]
    pub error: Option<String>,
    #[serde(rename = "Title")]
    pub title: Option<String>,
    #[serde(rename = "Year")]
    pub year: Option<String>,
    #[serde(rename = "Director")]
    pub director: Option<String>,
    #[serde(rename = "Genre")]
    pub genre: Option<String>,
    #[serde(rename = "Poster")]
    pub poster: Option<String>,
}

/// Body returned by a fuzzy search (`?s=`).
#[derive(Debug, Deserialize)]
pub struct OmdbSearchResponse {
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Error")]
    pub error: Option<String>,
    #[serde(rename = "Search", default)]
    pub search: Vec<OmdbSearchItem>,
}

/// One candidate in a search result.
#[derive(Debug, Deserialize)]
pub struct OmdbSearchItem {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year")]
    pub year: Option<String>,
    #[serde(rename = "imdbID")]
    pub imdb_id: Option<String>,
    #[serde(rename = "Type")]
    pub kind: Option<String>,
}
