//! Movie repository trait definition.
//!
//! This port defines the interface for movie persistence operations.
//! Implementations must handle all storage details internally, including
//! the transaction boundary of each mutation.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{Movie, NewMovie};

/// Repository for movie persistence operations.
///
/// # Design Rules
///
/// - No `sqlx` types in signatures
/// - Each mutating method runs in its own transaction and either commits
///   or rolls back before returning
/// - Only the title is ever updated
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// Insert a new movie and return it with its assigned ID.
    ///
    /// Returns `Err(RepositoryError::Constraint)` if `user_id` does not
    /// reference an existing user.
    async fn insert(&self, movie: &NewMovie) -> Result<Movie, RepositoryError>;

    /// Get a movie by its database ID.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the movie doesn't exist.
    async fn get_by_id(&self, id: i64) -> Result<Movie, RepositoryError>;

    /// List every movie across all users, in insertion order.
    async fn list_all(&self) -> Result<Vec<Movie>, RepositoryError>;

    /// List all movies owned by a user, in insertion order.
    async fn list_for_user(&self, user_id: i64) -> Result<Vec<Movie>, RepositoryError>;

    /// Replace a movie's title and return the updated movie.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the movie doesn't exist.
    async fn update_title(&self, id: i64, title: &str) -> Result<Movie, RepositoryError>;

    /// Delete a movie by its database ID.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the movie doesn't exist.
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}
