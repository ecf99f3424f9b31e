//! Movie domain types.
//!
//! A movie's descriptive fields always come from the title-resolution
//! provider. `NewMovie::from_record` is the single place where a provider
//! record is mapped onto the stored shape.

use serde::{Deserialize, Serialize};

use crate::ports::TitleRecord;

/// Placeholder stored for text fields the provider did not supply.
pub const UNKNOWN_FIELD: &str = "Unknown";

/// A movie persisted in a user's favorites list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    /// Canonical title as reported by the provider (renamable).
    pub title: String,
    pub year: Option<i32>,
    pub director: String,
    pub genre: String,
    pub poster_url: Option<String>,
    /// Owning user. Set once at creation.
    pub user_id: i64,
}

/// Data for inserting a new movie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMovie {
    pub title: String,
    pub year: Option<i32>,
    pub director: String,
    pub genre: String,
    pub poster_url: Option<String>,
    pub user_id: i64,
}

impl NewMovie {
    /// Build a movie from a resolved provider record.
    ///
    /// The title is the provider's canonical title, never the user's query.
    /// Missing text fields fall back to [`UNKNOWN_FIELD`]; a missing or
    /// unparseable year and a missing poster become `None`.
    pub fn from_record(record: TitleRecord, user_id: i64) -> Self {
        Self {
            title: record.title,
            year: record.year.as_deref().and_then(parse_year),
            director: record
                .director
                .unwrap_or_else(|| UNKNOWN_FIELD.to_string()),
            genre: record.genre.unwrap_or_else(|| UNKNOWN_FIELD.to_string()),
            poster_url: record.poster_url,
            user_id,
        }
    }
}

/// Parse a year from provider text.
///
/// Providers report ranges for series ("2010–2013") and sometimes
/// trailing dashes ("2019–"), so only the leading four digits are read.
pub fn parse_year(raw: &str) -> Option<i32> {
    let digits: String = raw
        .trim()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    if digits.len() == 4 {
        digits.parse().ok()
    } else {
        None
    }
}
