//! `SQLite` implementation of the `MovieRepository` trait.

use async_trait::async_trait;
use sqlx::SqlitePool;

use moviweb_core::{Movie, MovieRepository, NewMovie, RepositoryError};

use super::row_mappers::{MOVIE_SELECT_COLUMNS, MovieRow, map_sqlx_error};
use super::transaction::{rollback, rollback_sqlx};

/// `SQLite` implementation of the `MovieRepository` trait.
///
/// This struct holds a connection pool; every mutation opens its own
/// transaction and commits or rolls back before returning.
pub struct SqliteMovieRepository {
    pool: SqlitePool,
}

impl SqliteMovieRepository {
    /// Create a new `SQLite` movie repository.
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn movie_not_found(id: i64) -> RepositoryError {
    RepositoryError::NotFound(format!("Movie with ID {id}"))
}

#[async_trait]
impl MovieRepository for SqliteMovieRepository {
    async fn insert(&self, movie: &NewMovie) -> Result<Movie, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        let inserted = sqlx::query(
            r"INSERT INTO movies (title, year, director, genre, poster_url, user_id)
              VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&movie.title)
        .bind(movie.year)
        .bind(&movie.director)
        .bind(&movie.genre)
        .bind(&movie.poster_url)
        .bind(movie.user_id)
        .execute(&mut *tx)
        .await;

        let id = match inserted {
            Ok(done) => done.last_insert_rowid(),
            Err(e) => return Err(rollback_sqlx(tx, e).await),
        };

        tx.commit().await.map_err(map_sqlx_error)?;
        tracing::debug!(movie_id = id, user_id = movie.user_id, "Inserted movie");

        Ok(Movie {
            id,
            title: movie.title.clone(),
            year: movie.year,
            director: movie.director.clone(),
            genre: movie.genre.clone(),
            poster_url: movie.poster_url.clone(),
            user_id: movie.user_id,
        })
    }

    async fn get_by_id(&self, id: i64) -> Result<Movie, RepositoryError> {
        let query = format!("SELECT {MOVIE_SELECT_COLUMNS} FROM movies WHERE id = ?");

        sqlx::query_as::<_, MovieRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .map(Movie::from)
            .ok_or_else(|| movie_not_found(id))
    }

    async fn list_all(&self) -> Result<Vec<Movie>, RepositoryError> {
        let query = format!("SELECT {MOVIE_SELECT_COLUMNS} FROM movies ORDER BY id");

        let rows = sqlx::query_as::<_, MovieRow>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(Movie::from).collect())
    }

    async fn list_for_user(&self, user_id: i64) -> Result<Vec<Movie>, RepositoryError> {
        let query =
            format!("SELECT {MOVIE_SELECT_COLUMNS} FROM movies WHERE user_id = ? ORDER BY id");

        let rows = sqlx::query_as::<_, MovieRow>(&query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(Movie::from).collect())
    }

    async fn update_title(&self, id: i64, title: &str) -> Result<Movie, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        let updated = sqlx::query("UPDATE movies SET title = ? WHERE id = ?")
            .bind(title)
            .bind(id)
            .execute(&mut *tx)
            .await;

        match updated {
            Ok(done) if done.rows_affected() == 0 => {
                return Err(rollback(tx, movie_not_found(id)).await);
            }
            Ok(_) => {}
            Err(e) => return Err(rollback_sqlx(tx, e).await),
        }

        let query = format!("SELECT {MOVIE_SELECT_COLUMNS} FROM movies WHERE id = ?");
        let row = sqlx::query_as::<_, MovieRow>(&query)
            .bind(id)
            .fetch_one(&mut *tx)
            .await;

        let movie = match row {
            Ok(row) => Movie::from(row),
            Err(e) => return Err(rollback_sqlx(tx, e).await),
        };

        tx.commit().await.map_err(map_sqlx_error)?;
        Ok(movie)
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        let deleted = sqlx::query("DELETE FROM movies WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await;

        match deleted {
            Ok(done) if done.rows_affected() == 0 => {
                return Err(rollback(tx, movie_not_found(id)).await);
            }
            Ok(_) => {}
            Err(e) => return Err(rollback_sqlx(tx, e).await),
        }

        tx.commit().await.map_err(map_sqlx_error)?;
        Ok(())
    }
}
