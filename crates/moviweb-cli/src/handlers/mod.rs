//! Command handlers that delegate to the catalog service.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn name(ctx: &CliContext, format: OutputFormat, ...) -> Result<String, CliError>`
//! - Thin wrappers that:
//!   1. Call `CatalogService` methods
//!   2. Render the result for the terminal or as JSON
//!
//! Handlers should NOT:
//! - Access repositories directly
//! - Contain business logic
//! - Print failures (the entry point reports errors uniformly)

pub mod movies;
pub mod suggest;
pub mod users;

use serde::Serialize;

use moviweb_core::Outcome;

use crate::error::CliError;
use crate::presentation::to_json;

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable tables.
    Table,
    /// JSON documents.
    Json,
}

impl OutputFormat {
    /// Pick the format from the `--json` flag.
    pub const fn from_flag(json: bool) -> Self {
        if json { Self::Json } else { Self::Table }
    }
}

/// Render a mutation result: JSON as `{"success": ...}`, otherwise via `table`.
fn render_success<T: Serialize>(
    format: OutputFormat,
    value: T,
    table: impl FnOnce(&T) -> String,
) -> Result<String, CliError> {
    match format {
        OutputFormat::Json => to_json(&Outcome::Success { success: value }),
        OutputFormat::Table => Ok(table(&value)),
    }
}

/// Render a read result: JSON as the plain value, otherwise via `table`.
fn render_listing<T: Serialize + ?Sized>(
    format: OutputFormat,
    value: &T,
    table: impl FnOnce(&T) -> String,
) -> Result<String, CliError> {
    match format {
        OutputFormat::Json => to_json(value),
        OutputFormat::Table => Ok(table(value)),
    }
}
