//! Composition utilities for building the catalog with `SQLite` backends.
//!
//! This module provides factory functions for wiring up repositories.
//! It is focused purely on construction and should not contain any
//! domain logic.

use sqlx::SqlitePool;
use std::path::Path;
use std::sync::Arc;

use moviweb_core::ports::TitleResolverPort;
use moviweb_core::{CatalogService, Repos};

use crate::repositories::{SqliteMovieRepository, SqliteUserRepository};
use crate::setup::setup_database;

/// Factory for creating repository instances with `SQLite` backends.
pub struct CoreFactory;

impl CoreFactory {
    /// Open (or create) the database at `db_path` with the schema applied.
    pub async fn create_pool(db_path: &Path) -> anyhow::Result<SqlitePool> {
        setup_database(db_path).await
    }

    /// Build all `SQLite` repositories from a pool.
    ///
    /// Returns a `Repos` struct from `moviweb-core` containing
    /// trait-object-wrapped repositories.
    pub fn build_repos(pool: SqlitePool) -> Repos {
        Repos::new(
            Arc::new(SqliteUserRepository::new(pool.clone())),
            Arc::new(SqliteMovieRepository::new(pool)),
        )
    }

    /// Build a complete `CatalogService` from a pool and a title resolver.
    ///
    /// Equivalent to:
    ///
    /// ```ignore
    /// let repos = CoreFactory::build_repos(pool);
    /// let service = CatalogService::new(repos, resolver);
    /// ```
    pub fn build_catalog(pool: SqlitePool, resolver: Arc<dyn TitleResolverPort>) -> CatalogService {
        CatalogService::new(Self::build_repos(pool), resolver)
    }

    /// Create a user repository from a pool.
    pub fn user_repository(pool: SqlitePool) -> Arc<SqliteUserRepository> {
        Arc::new(SqliteUserRepository::new(pool))
    }

    /// Create a movie repository from a pool.
    pub fn movie_repository(pool: SqlitePool) -> Arc<SqliteMovieRepository> {
        Arc::new(SqliteMovieRepository::new(pool))
    }
}

/// Test database helper for integration tests.
///
/// Provides an in-memory `SQLite` database with the production schema
/// already applied.
#[cfg(any(test, feature = "test-utils"))]
pub struct TestDb {
    pool: SqlitePool,
}

#[cfg(any(test, feature = "test-utils"))]
impl TestDb {
    /// Create a new in-memory test database with full schema.
    pub async fn new() -> anyhow::Result<Self> {
        let pool = crate::setup::setup_test_database().await?;
        Ok(Self { pool })
    }

    /// Get the connection pool.
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Build a `Repos` bundle over this database.
    pub fn repos(&self) -> Repos {
        CoreFactory::build_repos(self.pool.clone())
    }

    /// Build a `CatalogService` over this database.
    pub fn catalog(&self, resolver: Arc<dyn TitleResolverPort>) -> CatalogService {
        CoreFactory::build_catalog(self.pool.clone(), resolver)
    }

    /// Count the rows currently stored in `movies`.
    pub async fn movie_count(&self) -> anyhow::Result<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM movies")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Count the rows currently stored in `users`.
    pub async fn user_count(&self) -> anyhow::Result<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moviweb_core::{MovieRepository, NewUser, UserRepository};

    #[tokio::test]
    async fn test_build_repos_shares_one_database() {
        let db = TestDb::new().await.unwrap();
        let repos = db.repos();

        let user = repos
            .users
            .insert(&NewUser::new("Ada"))
            .await
            .unwrap();
        assert_eq!(db.user_count().await.unwrap(), 1);
        assert!(repos.movies.list_for_user(user.id).await.unwrap().is_empty());
        assert_eq!(db.movie_count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_create_pool_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let pool = CoreFactory::create_pool(&dir.path().join("movies.db"))
            .await
            .unwrap();

        let users = CoreFactory::user_repository(pool.clone());
        let movies = CoreFactory::movie_repository(pool);
        assert!(users.list().await.unwrap().is_empty());
        assert!(movies.list_all().await.unwrap().is_empty());
    }
}
