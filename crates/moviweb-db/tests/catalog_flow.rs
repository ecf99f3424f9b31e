//! Integration tests for the catalog service over a real `SQLite` database.
//!
//! The title provider is replaced by `FakeTitleResolver`, so no network
//! access is required. Every test gets its own in-memory database.
//!
//! # What is tested
//!
//! - A resolved title is persisted with provider metadata and listed
//! - Unknown titles report suggestions and persist nothing
//! - Transport failures skip the suggestion search and persist nothing
//! - Rename trims and is idempotent; delete removes exactly one row
//! - A failed insert leaves the movie table untouched
//! - The catalog-wide listing spans every user

use std::sync::Arc;

use moviweb_core::testing::{FAKE_NOT_FOUND_REASON, FakeTitleResolver};
use moviweb_core::{CatalogError, Movie, Outcome, TitleRecord, UNKNOWN_FIELD};
use moviweb_db::TestDb;

// ── Fixtures ───────────────────────────────────────────────────────

fn inception() -> TitleRecord {
    TitleRecord {
        title: "Inception".to_string(),
        year: Some("2010".to_string()),
        director: Some("Christopher Nolan".to_string()),
        genre: Some("Action, Adventure, Sci-Fi".to_string()),
        poster_url: Some("https://example.test/inception.jpg".to_string()),
    }
}

fn resolver() -> Arc<FakeTitleResolver> {
    Arc::new(
        FakeTitleResolver::new()
            .with_record("inception", inception())
            .with_title("The Matrix")
            .with_suggestions("Incepshun", &["Inception", "Inception: The Cobol Job"]),
    )
}

// ── Add by title ───────────────────────────────────────────────────

#[tokio::test]
async fn resolved_title_is_stored_with_provider_metadata() {
    let db = TestDb::new().await.unwrap();
    let resolver = resolver();
    let catalog = db.catalog(resolver.clone());

    let user = catalog.create_user("  Alice ").await.unwrap();
    assert_eq!(user.name, "Alice");

    let movie = catalog
        .add_movie_by_title("  inception  ", user.id)
        .await
        .unwrap();

    // Canonical title from the provider, not the user's spelling
    assert_eq!(movie.title, "Inception");
    assert_eq!(movie.year, Some(2010));
    assert_eq!(movie.director, "Christopher Nolan");
    assert_eq!(movie.genre, "Action, Adventure, Sci-Fi");
    assert_eq!(
        movie.poster_url.as_deref(),
        Some("https://example.test/inception.jpg")
    );
    assert_eq!(movie.user_id, user.id);

    let listed = catalog.list_movies_for_user(user.id).await;
    assert_eq!(listed, vec![movie]);
    assert_eq!(resolver.exact_calls(), 1);
    assert_eq!(resolver.fuzzy_calls(), 0);
}

#[tokio::test]
async fn missing_metadata_defaults_to_unknown() {
    let db = TestDb::new().await.unwrap();
    let catalog = db.catalog(resolver());
    let user = catalog.create_user("Bob").await.unwrap();

    let movie = catalog
        .add_movie_by_title("The Matrix", user.id)
        .await
        .unwrap();

    assert_eq!(movie.year, None);
    assert_eq!(movie.director, UNKNOWN_FIELD);
    assert_eq!(movie.genre, UNKNOWN_FIELD);
    assert_eq!(movie.poster_url, None);
}

#[tokio::test]
async fn unknown_title_reports_suggestions_and_persists_nothing() {
    let db = TestDb::new().await.unwrap();
    let resolver = resolver();
    let catalog = db.catalog(resolver.clone());
    let user = catalog.create_user("Carol").await.unwrap();

    let err = catalog
        .add_movie_by_title("Incepshun", user.id)
        .await
        .unwrap_err();

    match &err {
        CatalogError::TitleNotFound {
            title,
            reason,
            suggestions,
        } => {
            assert_eq!(title, "Incepshun");
            assert_eq!(reason, FAKE_NOT_FOUND_REASON);
            assert_eq!(suggestions, &["Inception", "Inception: The Cobol Job"]);
        }
        other => panic!("expected TitleNotFound, got {other:?}"),
    }
    assert_eq!(resolver.fuzzy_calls(), 1);
    assert_eq!(db.movie_count().await.unwrap(), 0);

    let result: Result<Movie, CatalogError> = Err(err);
    let outcome = Outcome::from(result);
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["suggestions"][0], "Inception");
}

#[tokio::test]
async fn unavailable_provider_skips_suggestion_search() {
    let db = TestDb::new().await.unwrap();
    let resolver = Arc::new(FakeTitleResolver::new().with_exact_unavailable());
    let catalog = db.catalog(resolver.clone());
    let user = catalog.create_user("Dave").await.unwrap();

    let err = catalog
        .add_movie_by_title("Inception", user.id)
        .await
        .unwrap_err();

    assert!(matches!(err, CatalogError::ProviderUnavailable(_)));
    assert!(err.suggestions().is_none());
    assert_eq!(resolver.fuzzy_calls(), 0);
    assert_eq!(db.movie_count().await.unwrap(), 0);
}

#[tokio::test]
async fn insert_for_missing_user_fails_without_partial_write() {
    let db = TestDb::new().await.unwrap();
    let catalog = db.catalog(resolver());
    let user = catalog.create_user("Erin").await.unwrap();
    catalog
        .add_movie_by_title("The Matrix", user.id)
        .await
        .unwrap();

    let err = catalog
        .add_movie_by_title("inception", user.id + 100)
        .await
        .unwrap_err();

    assert!(matches!(err, CatalogError::Storage(_)));
    assert_eq!(db.movie_count().await.unwrap(), 1);
}

// ── Rename / delete ────────────────────────────────────────────────

#[tokio::test]
async fn rename_trims_and_is_idempotent() {
    let db = TestDb::new().await.unwrap();
    let catalog = db.catalog(resolver());
    let user = catalog.create_user("Frank").await.unwrap();
    let movie = catalog
        .add_movie_by_title("inception", user.id)
        .await
        .unwrap();

    let first = catalog.rename_movie(movie.id, "  Same  ").await.unwrap();
    let second = catalog.rename_movie(movie.id, "  Same  ").await.unwrap();

    assert_eq!(first.title, "Same");
    assert_eq!(first, second);
    assert_eq!(second.director, movie.director);
    assert_eq!(second.year, movie.year);
}

#[tokio::test]
async fn rename_of_missing_movie_is_entity_not_found() {
    let db = TestDb::new().await.unwrap();
    let catalog = db.catalog(resolver());

    let err = catalog.rename_movie(42, "Anything").await.unwrap_err();
    assert!(matches!(err, CatalogError::EntityNotFound(_)));
}

#[tokio::test]
async fn delete_removes_exactly_one_movie() {
    let db = TestDb::new().await.unwrap();
    let catalog = db.catalog(resolver());
    let user = catalog.create_user("Grace").await.unwrap();
    let keep = catalog
        .add_movie_by_title("The Matrix", user.id)
        .await
        .unwrap();
    let gone = catalog
        .add_movie_by_title("inception", user.id)
        .await
        .unwrap();

    let deleted = catalog.delete_movie(gone.id).await.unwrap();
    assert_eq!(deleted, gone);
    assert_eq!(catalog.list_movies_for_user(user.id).await, vec![keep]);

    let err = catalog.delete_movie(gone.id).await.unwrap_err();
    assert!(matches!(err, CatalogError::EntityNotFound(_)));
    assert_eq!(db.movie_count().await.unwrap(), 1);
}

// ── Listing ────────────────────────────────────────────────────────

#[tokio::test]
async fn users_are_listed_in_creation_order() {
    let db = TestDb::new().await.unwrap();
    let catalog = db.catalog(resolver());

    catalog.create_user("Zed").await.unwrap();
    catalog.create_user("Amy").await.unwrap();
    assert!(catalog.create_user("   ").await.is_err());

    let names: Vec<String> = catalog
        .list_users()
        .await
        .into_iter()
        .map(|u| u.name)
        .collect();
    assert_eq!(names, vec!["Zed", "Amy"]);
    assert!(catalog.list_movies_for_user(999).await.is_empty());
}

#[tokio::test]
async fn catalog_wide_listing_covers_every_user() {
    let db = TestDb::new().await.unwrap();
    let catalog = db.catalog(resolver());
    let alice = catalog.create_user("Alice").await.unwrap();
    let bob = catalog.create_user("Bob").await.unwrap();

    let first = catalog
        .add_movie_by_title("inception", alice.id)
        .await
        .unwrap();
    let second = catalog
        .add_movie_by_title("The Matrix", bob.id)
        .await
        .unwrap();

    assert_eq!(catalog.list_all_movies().await, vec![first, second.clone()]);
    assert_eq!(catalog.list_movies_for_user(bob.id).await, vec![second]);
}
