//! Row mapping helpers for `SQLite` queries.

use moviweb_core::{Movie, RepositoryError, User};

/// Shared SELECT column list for movie queries.
pub const MOVIE_SELECT_COLUMNS: &str = "id, title, year, director, genre, poster_url, user_id";

#[derive(sqlx::FromRow)]
pub struct UserRow {
    id: i64,
    name: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
        }
    }
}

#[derive(sqlx::FromRow)]
pub struct MovieRow {
    id: i64,
    title: String,
    year: Option<i32>,
    director: String,
    genre: String,
    poster_url: Option<String>,
    user_id: i64,
}

impl From<MovieRow> for Movie {
    fn from(row: MovieRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            year: row.year,
            director: row.director,
            genre: row.genre,
            poster_url: row.poster_url,
            user_id: row.user_id,
        }
    }
}

/// Map `SQLx` errors to `RepositoryError`.
pub fn map_sqlx_error(e: sqlx::Error) -> RepositoryError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation()
            || db_err.is_unique_violation()
            || db_err.is_check_violation()
        {
            return RepositoryError::Constraint(db_err.message().to_string());
        }
    }
    RepositoryError::Storage(e.to_string())
}
