//! Repositories for database operations
//!
//! [`Repository`] carries the operations every table shares. The typed
//! inserts and updates live next to each record type in the submodules.

use anyhow::Result;
use sqlx::{FromRow, SqlitePool, sqlite::SqliteRow};
use std::marker::PhantomData;
use tracing::info;

pub mod education;
pub mod experience;
pub mod personal_data;
pub mod skill;
pub mod user;

pub use education::EducationRepository;
pub use experience::ExperienceRepository;
pub use personal_data::PersonalDataRepository;
pub use skill::SkillRepository;
pub use user::UserRepository;

/// A type stored as one row of one table
pub trait Record: for<'r> FromRow<'r, SqliteRow> + Send + Unpin + 'static {
    /// Table name
    const TABLE: &'static str;
    /// Column list used by every `SELECT` and `RETURNING` clause
    const COLUMNS: &'static str;
    /// Ordering used when listing rows
    const ORDER_BY: &'static str = "id ASC";
}

/// A record that belongs to a user through its `user_id` column
pub trait OwnedRecord: Record {}

/// Generic repository over one record type
pub struct Repository<T> {
    pool: SqlitePool,
    _record: PhantomData<fn() -> T>,
}

impl<T> Clone for Repository<T> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _record: PhantomData,
        }
    }
}

impl<T: Record> Repository<T> {
    /// Create a new repository
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            _record: PhantomData,
        }
    }

    pub(crate) fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Find a row by its ID
    pub async fn get_by_id(&self, id: i64) -> Result<Option<T>> {
        let sql = format!("SELECT {} FROM {} WHERE id = ?", T::COLUMNS, T::TABLE);
        let record = sqlx::query_as::<_, T>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(record)
    }
}

impl<T: OwnedRecord> Repository<T> {
    /// Find a row by its ID, only if it belongs to the given user
    pub async fn get_owned(&self, id: i64, user_id: i64) -> Result<Option<T>> {
        let sql = format!(
            "SELECT {} FROM {} WHERE id = ? AND user_id = ?",
            T::COLUMNS,
            T::TABLE
        );
        let record = sqlx::query_as::<_, T>(&sql)
            .bind(id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(record)
    }

    /// Get all rows belonging to a user
    pub async fn get_all_by_user_id(&self, user_id: i64) -> Result<Vec<T>> {
        let sql = format!(
            "SELECT {} FROM {} WHERE user_id = ? ORDER BY {}",
            T::COLUMNS,
            T::TABLE,
            T::ORDER_BY
        );
        let records = sqlx::query_as::<_, T>(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(records)
    }

    /// Get the oldest row belonging to a user
    pub async fn first_by_user_id(&self, user_id: i64) -> Result<Option<T>> {
        let sql = format!(
            "SELECT {} FROM {} WHERE user_id = ? ORDER BY id ASC LIMIT 1",
            T::COLUMNS,
            T::TABLE
        );
        let record = sqlx::query_as::<_, T>(&sql)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(record)
    }

    /// Delete a row owned by the given user
    ///
    /// Returns `false` when no such row exists for that user.
    pub async fn delete(&self, id: i64, user_id: i64) -> Result<bool> {
        info!("Deleting {} {} of user {}", T::TABLE, id, user_id);

        let sql = format!("DELETE FROM {} WHERE id = ? AND user_id = ?", T::TABLE);
        let result = sqlx::query(&sql)
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
