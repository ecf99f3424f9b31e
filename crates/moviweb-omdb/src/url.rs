//! URL construction helpers for the OMDb API.
//!
//! This module provides pure functions for building OMDb request URLs,
//! plus redaction of the API key for anything that ends up in logs or
//! error messages.

use crate::models::OmdbConfig;
use url::Url;

/// Placeholder substituted for the API key in redacted URLs.
const REDACTED: &str = "***";

/// Build a URL with a single lookup parameter and the API key.
fn build_lookup_url(config: &OmdbConfig, param: &str, value: &str) -> Url {
    let mut url = config.base_url.clone();
    url.set_query(Some(&format!(
        "{param}={}&apikey={}",
        urlencoding::encode(value),
        urlencoding::encode(&config.api_key)
    )));
    url
}

/// Build the exact-title lookup URL (`?t=<title>&apikey=<key>`).
pub fn build_title_url(config: &OmdbConfig, title: &str) -> Url {
    build_lookup_url(config, "t", title)
}

/// Build the fuzzy search URL (`?s=<title>&apikey=<key>`).
pub fn build_search_url(config: &OmdbConfig, query: &str) -> Url {
    build_lookup_url(config, "s", query)
}

/// Render `url` with the `apikey` parameter value replaced.
pub fn redact(url: &Url) -> String {
    if !url.query_pairs().any(|(k, _)| k == "apikey") {
        return url.to_string();
    }

    let mut redacted = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "apikey" {
                REDACTED.to_string()
            } else {
                v.into_owned()
            };
            (k.into_owned(), v)
        })
        .collect();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}
