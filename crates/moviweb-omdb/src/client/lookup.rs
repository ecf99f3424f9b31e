//! Exact and fuzzy title lookups.

use moviweb_core::{SuggestionLookup, TitleLookup};

use crate::error::OmdbResult;
use crate::http::HttpBackend;
use crate::models::{OmdbSearchResponse, OmdbTitleResponse};
use crate::parsing::{parse_search_response, parse_title_response};
use crate::url::{build_search_url, build_title_url};

use super::OmdbClient;

impl<B: HttpBackend> OmdbClient<B> {
    /// Look up one title by exact name.
    pub(crate) async fn fetch_title(&self, title: &str) -> OmdbResult<TitleLookup> {
        let url = build_title_url(&self.config, title);
        let body: OmdbTitleResponse = self.backend.get_json(&url).await?;
        parse_title_response(body)
    }

    /// Search for titles resembling `query`.
    pub(crate) async fn search_titles(&self, query: &str) -> OmdbResult<SuggestionLookup> {
        let url = build_search_url(&self.config, query);
        let body: OmdbSearchResponse = self.backend.get_json(&url).await?;
        parse_search_response(body)
    }
}
