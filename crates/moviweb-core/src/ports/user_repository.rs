//! User repository trait definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{NewUser, User};

/// Repository for user persistence operations.
///
/// Users are never updated or deleted, so the port only covers
/// insert and listing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user and return it with its assigned ID.
    async fn insert(&self, user: &NewUser) -> Result<User, RepositoryError>;

    /// List all users in insertion order.
    async fn list(&self) -> Result<Vec<User>, RepositoryError>;
}
