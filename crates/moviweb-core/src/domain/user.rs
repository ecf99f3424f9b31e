//! User domain types.

use serde::{Deserialize, Serialize};

/// A registered user that owns a list of favorite movies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
}

/// Data for creating a new user.
///
/// The name is expected to be trimmed and non-empty; `CatalogService`
/// enforces this before anything reaches a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
}

impl NewUser {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
