//! Catalog service - users, their favorite movies, and title resolution.
//!
//! Adding a movie walks a fixed path:
//!
//! ```text
//! validate -> exact lookup -> Found    -> persist -> committed
//!                          -> NotFound -> suggestion search -> reported
//!                          -> transport error (no suggestions)
//! ```
//!
//! The provider call always finishes before the repository opens its
//! transaction, so no lock is held across network I/O.

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::domain::{Movie, NewMovie, NewUser, User};
use crate::error::CatalogError;
use crate::ports::{
    MovieRepository, Repos, SuggestionLookup, TitleLookup, TitleResolverPort, UserRepository,
};
use crate::utils::validation::require_text;

/// Sole owner of user/movie persistence and provider interaction.
pub struct CatalogService {
    users: Arc<dyn UserRepository>,
    movies: Arc<dyn MovieRepository>,
    resolver: Arc<dyn TitleResolverPort>,
}

impl CatalogService {
    /// Create a catalog service from repositories and a title resolver.
    pub fn new(repos: Repos, resolver: Arc<dyn TitleResolverPort>) -> Self {
        Self {
            users: repos.users,
            movies: repos.movies,
            resolver,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Users
    // ─────────────────────────────────────────────────────────────────────────

    /// Register a user under a trimmed, non-empty name.
    pub async fn create_user(&self, name: &str) -> Result<User, CatalogError> {
        let name = require_text(name, "name")?;
        let user = self.users.insert(&NewUser::new(name)).await?;
        info!(user_id = user.id, "Created user");
        Ok(user)
    }

    /// List all users.
    ///
    /// A storage failure degrades to an empty list.
    pub async fn list_users(&self) -> Vec<User> {
        self.users.list().await.unwrap_or_else(|e| {
            warn!(error = %e, "Failed to list users; returning empty list");
            Vec::new()
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Movies
    // ─────────────────────────────────────────────────────────────────────────

    /// List the movies owned by `user_id`.
    ///
    /// An unknown user simply has no movies. A storage failure degrades to
    /// an empty list.
    pub async fn list_movies_for_user(&self, user_id: i64) -> Vec<Movie> {
        self.movies.list_for_user(user_id).await.unwrap_or_else(|e| {
            warn!(user_id, error = %e, "Failed to list movies; returning empty list");
            Vec::new()
        })
    }

    /// List every movie in the catalog regardless of owner.
    ///
    /// A storage failure degrades to an empty list.
    pub async fn list_all_movies(&self) -> Vec<Movie> {
        self.movies.list_all().await.unwrap_or_else(|e| {
            warn!(error = %e, "Failed to list all movies; returning empty list");
            Vec::new()
        })
    }

    /// Resolve `title` against the provider and add it to `user_id`'s list.
    #[instrument(skip(self))]
    pub async fn add_movie_by_title(
        &self,
        title: &str,
        user_id: i64,
    ) -> Result<Movie, CatalogError> {
        let title = require_text(title, "title")?;

        let record = match self.resolver.lookup_exact(title).await {
            Ok(TitleLookup::Found(record)) => record,
            Ok(TitleLookup::NotFound { reason }) => {
                debug!(%reason, "Provider has no exact match");
                let suggestions = self.search_suggestions(title).await;
                return Err(CatalogError::TitleNotFound {
                    title: title.to_string(),
                    reason,
                    suggestions,
                });
            }
            Err(e) => {
                warn!(error = %e, "Title provider unavailable");
                return Err(e.into());
            }
        };

        let movie = self
            .movies
            .insert(&NewMovie::from_record(record, user_id))
            .await?;
        info!(movie_id = movie.id, title = %movie.title, "Added movie");
        Ok(movie)
    }

    /// Best-effort fuzzy search for titles resembling `title`.
    ///
    /// Never fails: blank input, provider negatives and transport errors all
    /// yield an empty list. Provider order is preserved.
    #[instrument(skip(self))]
    pub async fn search_suggestions(&self, title: &str) -> Vec<String> {
        let Ok(title) = require_text(title, "title") else {
            return Vec::new();
        };

        match self.resolver.lookup_fuzzy(title).await {
            Ok(SuggestionLookup::Matches(titles)) => titles,
            Ok(SuggestionLookup::NoMatches { reason }) => {
                debug!(%reason, "No suggestions");
                Vec::new()
            }
            Err(e) => {
                warn!(error = %e, "Suggestion search failed; returning no suggestions");
                Vec::new()
            }
        }
    }

    /// Change a movie's title. No other field is editable.
    pub async fn rename_movie(
        &self,
        movie_id: i64,
        new_title: &str,
    ) -> Result<Movie, CatalogError> {
        let new_title = require_text(new_title, "title")?;
        self.movies.get_by_id(movie_id).await?;

        let movie = self.movies.update_title(movie_id, new_title).await?;
        info!(movie_id, title = %movie.title, "Renamed movie");
        Ok(movie)
    }

    /// Delete a movie, returning what was removed.
    pub async fn delete_movie(&self, movie_id: i64) -> Result<Movie, CatalogError> {
        let movie = self.movies.get_by_id(movie_id).await?;
        self.movies.delete(movie_id).await?;
        info!(movie_id, "Deleted movie");
        Ok(movie)
    }
}
