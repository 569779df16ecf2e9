//! Generic repository abstraction
//!
//! Every entity module persists through the same contract: reads go straight
//! to the pool, writes are staged on the repository and committed by `save`
//! in a single transaction. One repository instance is created per request,
//! so the staged changes form that request's unit of work.

use async_trait::async_trait;
use sqlx::sqlite::SqliteQueryResult;
use sqlx::{Sqlite, SqlitePool, Transaction};

use super::error::ApiError;

/// Per-entity extension point supplying the SQL for the generic contract.
///
/// `fetch_all`/`fetch_by_id` may pull in related records (Topic eager-loads
/// its Articles); the row operations run inside the unit-of-work transaction.
#[async_trait]
pub trait Entity: Send + Sync + Sized {
    async fn fetch_all(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error>;

    async fn fetch_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error>;

    async fn exists(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error>;

    async fn insert_row(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
    ) -> Result<SqliteQueryResult, sqlx::Error>;

    async fn update_row(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
    ) -> Result<SqliteQueryResult, sqlx::Error>;

    async fn delete_row(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
    ) -> Result<SqliteQueryResult, sqlx::Error>;
}

/// Uniform persistence contract implemented by every entity repository.
///
/// `create`, `update` and `delete` only stage changes; nothing reaches the
/// store until `save` commits. `create` calls `save` itself so a single call
/// persists the instance, mirroring the success-flag contract of the other
/// mutating operations.
#[async_trait]
pub trait Repository<T>: Send {
    /// All persisted instances; an empty collection when none exist.
    async fn find_all(&self) -> Result<Vec<T>, ApiError>;

    /// `None` is a valid, non-error outcome for an absent id.
    async fn find_by_id(&self, id: i64) -> Result<Option<T>, ApiError>;

    /// Pure existence predicate; never errors for a nonexistent id.
    async fn is_exists(&self, id: i64) -> Result<bool, ApiError>;

    /// Stages an insert then commits; true iff a row was persisted.
    async fn create(&mut self, model: T) -> Result<bool, ApiError>;

    /// Stages an update. The caller is responsible for pre-checking that the
    /// instance's id exists.
    async fn update(&mut self, model: T) -> Result<bool, ApiError>;

    /// Stages removal of an already-fetched instance. Callers must
    /// fetch-then-delete.
    async fn delete(&mut self, model: T) -> Result<bool, ApiError>;

    /// Commits all staged changes atomically; true iff at least one row was
    /// affected. Store-reported failures roll the transaction back and
    /// surface as errors, never as a silent false.
    async fn save(&mut self) -> Result<bool, ApiError>;
}

enum Staged<T> {
    Insert(T),
    Update(T),
    Delete(T),
}

/// Generic SQLite-backed repository; the `Entity` impl provides the SQL.
pub struct SqlRepository<T> {
    db: SqlitePool,
    pending: Vec<Staged<T>>,
    last_insert_id: Option<i64>,
}

impl<T> SqlRepository<T> {
    pub fn new(db: SqlitePool) -> Self {
        Self {
            db,
            pending: Vec::new(),
            last_insert_id: None,
        }
    }

    /// Row id assigned to the most recently committed insert, if any.
    pub fn last_insert_id(&self) -> Option<i64> {
        self.last_insert_id
    }
}

#[async_trait]
impl<T: Entity + 'static> Repository<T> for SqlRepository<T> {
    async fn find_all(&self) -> Result<Vec<T>, ApiError> {
        T::fetch_all(&self.db).await.map_err(ApiError::DatabaseError)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<T>, ApiError> {
        T::fetch_by_id(&self.db, id)
            .await
            .map_err(ApiError::DatabaseError)
    }

    async fn is_exists(&self, id: i64) -> Result<bool, ApiError> {
        T::exists(&self.db, id).await.map_err(ApiError::DatabaseError)
    }

    async fn create(&mut self, model: T) -> Result<bool, ApiError> {
        self.pending.push(Staged::Insert(model));
        self.save().await
    }

    async fn update(&mut self, model: T) -> Result<bool, ApiError> {
        self.pending.push(Staged::Update(model));
        self.save().await
    }

    async fn delete(&mut self, model: T) -> Result<bool, ApiError> {
        self.pending.push(Staged::Delete(model));
        self.save().await
    }

    async fn save(&mut self) -> Result<bool, ApiError> {
        if self.pending.is_empty() {
            return Ok(false);
        }

        let mut tx = self.db.begin().await.map_err(ApiError::DatabaseError)?;
        let mut affected: u64 = 0;
        let mut last_insert_id = None;

        for change in &self.pending {
            let result = match change {
                Staged::Insert(model) => {
                    let result = model.insert_row(&mut tx).await;
                    if let Ok(r) = &result {
                        last_insert_id = Some(r.last_insert_rowid());
                    }
                    result
                }
                Staged::Update(model) => model.update_row(&mut tx).await,
                Staged::Delete(model) => model.delete_row(&mut tx).await,
            };
            // Dropping the transaction on the error path rolls everything back.
            affected += result.map_err(ApiError::DatabaseError)?.rows_affected();
        }

        tx.commit().await.map_err(ApiError::DatabaseError)?;

        self.pending.clear();
        if last_insert_id.is_some() {
            self.last_insert_id = last_insert_id;
        }

        Ok(affected > 0)
    }
}
