//! Decoding of OMDb response envelopes into port types.
//!
//! OMDb signals "not found" inside a 200 response, so the `Response` flag
//! is the only thing that separates a miss from a hit. Each body is
//! decoded exactly once here; a body that is neither is an error.

use moviweb_core::{SuggestionLookup, TitleLookup, TitleRecord};

use crate::error::{OmdbError, OmdbResult};
use crate::models::{OmdbSearchResponse, OmdbTitleResponse};

/// Placeholder OMDb uses for absent fields.
const NOT_AVAILABLE: &str = "N/A";

/// Reason reported when a negative response carries no `Error` text.
const DEFAULT_NOT_FOUND_REASON: &str = "Movie not found!";

/// Interpret the `Response` flag.
fn is_positive(flag: &str) -> OmdbResult<bool> {
    match flag {
        "True" => Ok(true),
        "False" => Ok(false),
        other => Err(OmdbError::InvalidResponse {
            message: format!("unexpected Response flag '{other}'"),
        }),
    }
}

/// Drop blank values and OMDb's `N/A` placeholder.
fn available(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty() && v != NOT_AVAILABLE)
}

fn reason(error: Option<String>) -> String {
    available(error).unwrap_or_else(|| DEFAULT_NOT_FOUND_REASON.to_string())
}

/// Decode an exact-title lookup body.
///
/// A positive response without a usable `Title` is rejected as invalid.
pub fn parse_title_response(body: OmdbTitleResponse) -> OmdbResult<TitleLookup> {
    if !is_positive(&body.response)? {
        return Ok(TitleLookup::NotFound {
            reason: reason(body.error),
        });
    }

    let title = available(body.title).ok_or_else(|| OmdbError::InvalidResponse {
        message: "positive response without a Title".to_string(),
    })?;

    Ok(TitleLookup::Found(TitleRecord {
        title,
        year: available(body.year),
        director: available(body.director),
        genre: available(body.genre),
        poster_url: available(body.poster),
    }))
}

/// Decode a fuzzy search body, preserving provider order.
pub fn parse_search_response(body: OmdbSearchResponse) -> OmdbResult<SuggestionLookup> {
    if !is_positive(&body.response)? {
        return Ok(SuggestionLookup::NoMatches {
            reason: reason(body.error),
        });
    }

    let titles = body
        .search
        .into_iter()
        .filter_map(|item| available(Some(item.title)))
        .collect();
    Ok(SuggestionLookup::Matches(titles))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn title_body(value: Value) -> OmdbTitleResponse {
        serde_json::from_value(value).unwrap()
    }

    fn search_body(value: Value) -> OmdbSearchResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_positive_title_response() {
        let lookup = parse_title_response(title_body(json!({
            "Title": "Inception",
            "Year": "2010",
            "Director": "Christopher Nolan",
            "Genre": "Action, Adventure, Sci-Fi",
            "Poster": "https://example.test/inception.jpg",
            "Response": "True"
        })))
        .unwrap();

        let TitleLookup::Found(record) = lookup else {
            panic!("expected Found");
        };
        assert_eq!(record.title, "Inception");
        assert_eq!(record.year.as_deref(), Some("2010"));
        assert_eq!(record.director.as_deref(), Some("Christopher Nolan"));
        assert_eq!(
            record.poster_url.as_deref(),
            Some("https://example.test/inception.jpg")
        );
    }

    #[test]
    fn test_not_available_fields_become_none() {
        let lookup = parse_title_response(title_body(json!({
            "Title": "Obscure Short",
            "Year": "N/A",
            "Director": "N/A",
            "Genre": "",
            "Poster": "N/A",
            "Response": "True"
        })))
        .unwrap();

        let TitleLookup::Found(record) = lookup else {
            panic!("expected Found");
        };
        assert!(record.year.is_none());
        assert!(record.director.is_none());
        assert!(record.genre.is_none());
        assert!(record.poster_url.is_none());
    }

    #[test]
    fn test_negative_title_response_carries_reason() {
        let lookup = parse_title_response(title_body(json!({
            "Response": "False",
            "Error": "Movie not found!"
        })))
        .unwrap();

        assert_eq!(
            lookup,
            TitleLookup::NotFound {
                reason: "Movie not found!".to_string()
            }
        );
    }

    #[test]
    fn test_negative_without_error_uses_default_reason() {
        let lookup = parse_title_response(title_body(json!({ "Response": "False" }))).unwrap();
        assert!(matches!(lookup, TitleLookup::NotFound { reason } if reason == DEFAULT_NOT_FOUND_REASON));
    }

    #[test]
    fn test_positive_without_title_is_invalid() {
        let result = parse_title_response(title_body(json!({
            "Year": "2010",
            "Response": "True"
        })));
        assert!(matches!(result, Err(OmdbError::InvalidResponse { .. })));
    }

    #[test]
    fn test_unknown_response_flag_is_invalid() {
        let result = parse_title_response(title_body(json!({ "Response": "maybe" })));
        assert!(matches!(result, Err(OmdbError::InvalidResponse { .. })));
    }

    #[test]
    fn test_search_preserves_provider_order() {
        let lookup = parse_search_response(search_body(json!({
            "Search": [
                {"Title": "Heat", "Year": "1995", "imdbID": "tt0113277", "Type": "movie"},
                {"Title": "The Heat", "Year": "2013", "imdbID": "tt2404463", "Type": "movie"},
                {"Title": "Heat", "Year": "1986", "imdbID": "tt0093164", "Type": "movie"}
            ],
            "totalResults": "3",
            "Response": "True"
        })))
        .unwrap();

        assert_eq!(
            lookup,
            SuggestionLookup::Matches(vec![
                "Heat".to_string(),
                "The Heat".to_string(),
                "Heat".to_string()
            ])
        );
    }

    #[test]
    fn test_negative_search_response() {
        let lookup = parse_search_response(search_body(json!({
            "Response": "False",
            "Error": "Movie not found!"
        })))
        .unwrap();

        assert!(matches!(lookup, SuggestionLookup::NoMatches { .. }));
    }
}
