//! `SQLite` implementation of the `UserRepository` trait.

use async_trait::async_trait;
use sqlx::SqlitePool;

use moviweb_core::{NewUser, RepositoryError, User, UserRepository};

use super::row_mappers::{UserRow, map_sqlx_error};
use super::transaction::rollback_sqlx;

/// `SQLite` implementation of the `UserRepository` trait.
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    /// Create a new `SQLite` user repository.
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn insert(&self, user: &NewUser) -> Result<User, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        let inserted = sqlx::query("INSERT INTO users (name) VALUES (?)")
            .bind(&user.name)
            .execute(&mut *tx)
            .await;
        let id = match inserted {
            Ok(done) => done.last_insert_rowid(),
            Err(e) => return Err(rollback_sqlx(tx, e).await),
        };

        tx.commit().await.map_err(map_sqlx_error)?;

        Ok(User {
            id,
            name: user.name.clone(),
        })
    }

    async fn list(&self) -> Result<Vec<User>, RepositoryError> {
        let rows = sqlx::query_as::<_, UserRow>("SELECT id, name FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(User::from).collect())
    }
}
