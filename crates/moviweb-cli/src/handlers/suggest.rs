//! Suggest command handler.

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::render_suggestions;

use super::{OutputFormat, render_listing};

/// Print titles resembling `title`.
///
/// Never fails on provider problems; an unreachable provider simply
/// yields no suggestions.
pub async fn execute(
    ctx: &CliContext,
    format: OutputFormat,
    title: &str,
) -> Result<String, CliError> {
    let suggestions = ctx.catalog().search_suggestions(title).await;
    render_listing(format, suggestions.as_slice(), |s| {
        render_suggestions(title.trim(), s)
    })
}
