//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` or `reqwest` types in any signature
//! - Repository traits are CRUD-focused; every mutation commits or rolls back
//!   on its own
//! - The title resolver decodes provider responses into tagged variants

pub mod movie_repository;
pub mod title_resolver;
pub mod user_repository;

use std::sync::Arc;
use thiserror::Error;

// Re-export port traits for convenience
pub use movie_repository::MovieRepository;
pub use title_resolver::{
    ProviderError, ProviderResult, SuggestionLookup, TitleLookup, TitleRecord, TitleResolverPort,
};
pub use user_repository::UserRepository;

/// Container for all repository trait objects.
///
/// This struct provides a consistent way to wire repositories across adapters
/// without coupling them to concrete implementations. It lives in
/// `moviweb-core` so that `CatalogService` can accept it without depending
/// on `moviweb-db`.
#[derive(Clone)]
pub struct Repos {
    /// User repository.
    pub users: Arc<dyn UserRepository>,
    /// Movie repository.
    pub movies: Arc<dyn MovieRepository>,
}

impl Repos {
    /// Create a new Repos container.
    pub fn new(users: Arc<dyn UserRepository>, movies: Arc<dyn MovieRepository>) -> Self {
        Self { users, movies }
    }
}

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (e.g., sqlx errors)
/// and provides a clean interface for services to handle storage failures.
/// Any variant other than `NotFound` means the mutation was rolled back.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage backend error (database, connection, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// A constraint was violated (e.g., foreign key, unique constraint).
    #[error("Constraint violation: {0}")]
    Constraint(String),
}
