//! Shared CLI presentation utilities.
//!
//! This module provides reusable display and formatting functions
//! for consistent CLI output across commands. Everything here returns
//! strings; handlers decide where they go.
//!
//! # Guidelines
//!
//! - Keep this module format-only: no domain transforms
//! - Domain transforms belong in the catalog service

pub mod movie_display;
pub mod tables;

use serde::Serialize;

use crate::error::CliError;

// Re-export commonly used items
pub use movie_display::{render_all_movies, render_movie, render_movies, render_suggestions, render_users};
pub use tables::{format_optional, separator, truncate_string};

/// Pretty-print any serializable value as JSON.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(value)?)
}
