//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (database, HTTP, etc.).
//!
//! # Structure
//!
//! - `user` - User types (`User`, `NewUser`)
//! - `movie` - Movie types (`Movie`, `NewMovie`) and provider field mapping

mod movie;
mod user;

pub use movie::{Movie, NewMovie, UNKNOWN_FIELD, parse_year};
pub use user::{NewUser, User};
