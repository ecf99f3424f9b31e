//! In-memory fakes of the core ports.
//!
//! Available to this crate's tests and, through the `test-utils` feature,
//! to integration tests in adapter crates.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::ports::{
    ProviderError, ProviderResult, SuggestionLookup, TitleLookup, TitleRecord, TitleResolverPort,
};

/// Reason the fake reports for titles it has no record of.
pub const FAKE_NOT_FOUND_REASON: &str = "Movie not found!";

/// A title resolver that answers from canned records and counts its calls.
///
/// Exact lookups for unknown titles answer `NotFound`; fuzzy lookups answer
/// with the suggestions registered for the query, or `NoMatches`.
/// Either endpoint can be switched to fail with a timeout.
#[derive(Default)]
pub struct FakeTitleResolver {
    records: Mutex<HashMap<String, TitleRecord>>,
    suggestions: Mutex<HashMap<String, Vec<String>>>,
    exact_unavailable: bool,
    fuzzy_unavailable: bool,
    exact_calls: AtomicUsize,
    fuzzy_calls: AtomicUsize,
}

impl FakeTitleResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a record returned for an exact lookup of `query`.
    #[must_use]
    pub fn with_record(self, query: &str, record: TitleRecord) -> Self {
        self.records
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .insert(query.to_string(), record);
        self
    }

    /// Register a minimal record whose canonical title equals `title`.
    #[must_use]
    pub fn with_title(self, title: &str) -> Self {
        self.with_record(title, record(title))
    }

    /// Register fuzzy-lookup candidates for `query`.
    #[must_use]
    pub fn with_suggestions(self, query: &str, titles: &[&str]) -> Self {
        self.suggestions
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .insert(
                query.to_string(),
                titles.iter().map(ToString::to_string).collect(),
            );
        self
    }

    /// Make every exact lookup fail with a transport timeout.
    #[must_use]
    pub const fn with_exact_unavailable(mut self) -> Self {
        self.exact_unavailable = true;
        self
    }

    /// Make every fuzzy lookup fail with a transport timeout.
    #[must_use]
    pub const fn with_fuzzy_unavailable(mut self) -> Self {
        self.fuzzy_unavailable = true;
        self
    }

    /// Number of exact lookups performed so far.
    pub fn exact_calls(&self) -> usize {
        self.exact_calls.load(Ordering::SeqCst)
    }

    /// Number of fuzzy lookups performed so far.
    pub fn fuzzy_calls(&self) -> usize {
        self.fuzzy_calls.load(Ordering::SeqCst)
    }
}

/// Build a record with only a canonical title.
pub fn record(title: &str) -> TitleRecord {
    TitleRecord {
        title: title.to_string(),
        year: None,
        director: None,
        genre: None,
        poster_url: None,
    }
}

fn timeout() -> ProviderError {
    ProviderError::Timeout {
        message: "fake provider timed out".to_string(),
    }
}

#[async_trait]
impl TitleResolverPort for FakeTitleResolver {
    async fn lookup_exact(&self, title: &str) -> ProviderResult<TitleLookup> {
        self.exact_calls.fetch_add(1, Ordering::SeqCst);
        if self.exact_unavailable {
            return Err(timeout());
        }
        let found = self
            .records
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .get(title)
            .cloned();
        Ok(found.map_or_else(
            || TitleLookup::NotFound {
                reason: FAKE_NOT_FOUND_REASON.to_string(),
            },
            TitleLookup::Found,
        ))
    }

    async fn lookup_fuzzy(&self, title: &str) -> ProviderResult<SuggestionLookup> {
        self.fuzzy_calls.fetch_add(1, Ordering::SeqCst);
        if self.fuzzy_unavailable {
            return Err(timeout());
        }
        let matches = self
            .suggestions
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .get(title)
            .cloned();
        Ok(matches.map_or_else(
            || SuggestionLookup::NoMatches {
                reason: FAKE_NOT_FOUND_REASON.to_string(),
            },
            SuggestionLookup::Matches,
        ))
    }
}
