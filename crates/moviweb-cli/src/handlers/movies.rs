//! Movie command handlers.
//!
//! Adding resolves the title through OMDb first; nothing is written unless
//! the provider returns a match.

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{render_all_movies, render_movie, render_movies};

use super::{OutputFormat, render_listing, render_success};

/// List the movies owned by `user_id`.
pub async fn list(
    ctx: &CliContext,
    format: OutputFormat,
    user_id: i64,
) -> Result<String, CliError> {
    let movies = ctx.catalog().list_movies_for_user(user_id).await;
    render_listing(format, movies.as_slice(), |m| render_movies(user_id, m))
}

/// List every movie in the catalog with its owner.
pub async fn list_all(ctx: &CliContext, format: OutputFormat) -> Result<String, CliError> {
    let movies = ctx.catalog().list_all_movies().await;
    render_listing(format, movies.as_slice(), render_all_movies)
}

/// Resolve `title` and add it to `user_id`'s list.
///
/// # Errors
///
/// Returns `CliError::NotFound` (with suggestions) when OMDb has no such
/// title, `CliError::Unavailable` when OMDb cannot be reached, and
/// `CliError::Database` when the insert fails.
pub async fn add(
    ctx: &CliContext,
    format: OutputFormat,
    user_id: i64,
    title: &str,
) -> Result<String, CliError> {
    let movie = ctx.catalog().add_movie_by_title(title, user_id).await?;
    render_success(format, movie, |m| render_movie("Added movie:", m))
}

/// Change a movie's title.
///
/// # Errors
///
/// Returns `CliError::NotFound` for an unknown movie ID.
pub async fn rename(
    ctx: &CliContext,
    format: OutputFormat,
    movie_id: i64,
    title: &str,
) -> Result<String, CliError> {
    let movie = ctx.catalog().rename_movie(movie_id, title).await?;
    render_success(format, movie, |m| render_movie("Renamed movie:", m))
}

/// Delete a movie.
///
/// # Errors
///
/// Returns `CliError::NotFound` for an unknown movie ID.
pub async fn delete(
    ctx: &CliContext,
    format: OutputFormat,
    movie_id: i64,
) -> Result<String, CliError> {
    let movie = ctx.catalog().delete_movie(movie_id).await?;
    render_success(format, movie, |m| {
        format!("Deleted '{}' (ID {}).", m.title, m.id)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::bootstrap_with;
    use moviweb_core::testing::FakeTitleResolver;
    use moviweb_db::TestDb;
    use std::sync::Arc;

    async fn context(resolver: FakeTitleResolver) -> (TestDb, CliContext, i64) {
        let db = TestDb::new().await.unwrap();
        let ctx = bootstrap_with(db.repos(), Arc::new(resolver));
        let user = ctx.catalog().create_user("Ada").await.unwrap();
        (db, ctx, user.id)
    }

    #[tokio::test]
    async fn test_add_rename_delete_round_trip() {
        let (db, ctx, user_id) = context(FakeTitleResolver::new().with_title("Heat")).await;

        let added = add(&ctx, OutputFormat::Json, user_id, "Heat").await.unwrap();
        let value: serde_json::Value = serde_json::from_str(&added).unwrap();
        let movie_id = value["success"]["id"].as_i64().unwrap();
        assert_eq!(value["success"]["director"], "Unknown");

        let renamed = rename(&ctx, OutputFormat::Table, movie_id, " Heat (1995) ")
            .await
            .unwrap();
        assert!(renamed.contains("Heat (1995)"));

        let table = list(&ctx, OutputFormat::Table, user_id).await.unwrap();
        assert!(table.contains("Heat (1995)"));

        let deleted = delete(&ctx, OutputFormat::Table, movie_id).await.unwrap();
        assert!(deleted.starts_with("Deleted 'Heat (1995)'"));
        assert_eq!(db.movie_count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_unknown_title_carries_suggestions() {
        let resolver = FakeTitleResolver::new().with_suggestions("Haet", &["Heat", "The Heat"]);
        let (db, ctx, user_id) = context(resolver).await;

        let err = add(&ctx, OutputFormat::Table, user_id, "Haet").await.unwrap_err();
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.suggestions(), ["Heat".to_string(), "The Heat".to_string()]);

        let json = serde_json::to_value(err.to_outcome()).unwrap();
        assert_eq!(json["suggestions"][1], "The Heat");
        assert_eq!(db.movie_count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_provider_outage_is_unavailable() {
        let (_db, ctx, user_id) = context(FakeTitleResolver::new().with_exact_unavailable()).await;

        let err = add(&ctx, OutputFormat::Table, user_id, "Heat").await.unwrap_err();
        assert_eq!(err.exit_code(), 69);
        assert!(err.suggestions().is_empty());
    }

    #[tokio::test]
    async fn test_delete_missing_movie_is_not_found() {
        let (_db, ctx, _) = context(FakeTitleResolver::new()).await;

        let err = delete(&ctx, OutputFormat::Json, 404).await.unwrap_err();
        assert_eq!(err.exit_code(), 1);
    }

    #[tokio::test]
    async fn test_list_all_spans_users() {
        let resolver = FakeTitleResolver::new().with_title("Heat").with_title("Alien");
        let (_db, ctx, ada) = context(resolver).await;
        let grace = ctx.catalog().create_user("Grace").await.unwrap().id;

        add(&ctx, OutputFormat::Table, ada, "Heat").await.unwrap();
        add(&ctx, OutputFormat::Table, grace, "Alien").await.unwrap();

        let json = list_all(&ctx, OutputFormat::Json).await.unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let owners: Vec<i64> = value
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["user_id"].as_i64().unwrap())
            .collect();
        assert_eq!(owners, vec![ada, grace]);

        let table = list_all(&ctx, OutputFormat::Table).await.unwrap();
        assert!(table.contains("Heat"));
        assert!(table.contains("Alien"));
    }

    #[tokio::test]
    async fn test_list_json_is_plain_array() {
        let (_db, ctx, user_id) = context(FakeTitleResolver::new()).await;

        let json = list(&ctx, OutputFormat::Json, user_id).await.unwrap();
        assert_eq!(json.trim(), "[]");
    }
}
