//! User command handlers.

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::render_users;

use super::{OutputFormat, render_listing, render_success};

/// Register a user.
///
/// # Errors
///
/// Returns `CliError::Arguments` for a blank name and `CliError::Database`
/// if the insert fails.
pub async fn add(ctx: &CliContext, format: OutputFormat, name: &str) -> Result<String, CliError> {
    let user = ctx.catalog().create_user(name).await?;
    render_success(format, user, |u| {
        format!("Created user '{}' with ID {}.", u.name, u.id)
    })
}

/// List all users.
pub async fn list(ctx: &CliContext, format: OutputFormat) -> Result<String, CliError> {
    let users = ctx.catalog().list_users().await;
    render_listing(format, users.as_slice(), render_users)
}
