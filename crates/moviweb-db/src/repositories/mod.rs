//! Repository implementations using `SQLite`.
//!
//! These implementations encapsulate all SQL queries and database access.
//! The `SqlitePool` is confined to this module and never exposed through
//! the port trait signatures.

mod row_mappers;
mod sqlite_movie_repository;
mod sqlite_user_repository;
mod transaction;

pub use sqlite_movie_repository::SqliteMovieRepository;
pub use sqlite_user_repository::SqliteUserRepository;
