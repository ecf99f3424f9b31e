//! Transaction helpers shared by the repositories.

use moviweb_core::RepositoryError;
use sqlx::{Sqlite, Transaction};

use super::row_mappers::map_sqlx_error;

/// Roll back `tx` and return `err` mapped for the caller.
///
/// A failed rollback is logged; the original error is still returned.
pub async fn rollback(tx: Transaction<'_, Sqlite>, err: RepositoryError) -> RepositoryError {
    if let Err(rollback_err) = tx.rollback().await {
        tracing::warn!(error = %rollback_err, "Rollback failed");
    } else {
        tracing::warn!(error = %err, "Rolled back transaction");
    }
    err
}

/// Roll back `tx` because a statement failed with `err`.
pub async fn rollback_sqlx(tx: Transaction<'_, Sqlite>, err: sqlx::Error) -> RepositoryError {
    rollback(tx, map_sqlx_error(err)).await
}
