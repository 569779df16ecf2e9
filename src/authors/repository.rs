//! Author persistence: flat rows over the shared authors/identities table.
//!
//! Updates never touch `password_hash`; authors created here carry no
//! credential material and cannot log in until provisioned.

use async_trait::async_trait;
use sqlx::sqlite::SqliteQueryResult;
use sqlx::{Sqlite, SqlitePool, Transaction};

use super::models::Author;
use crate::common::{Entity, SqlRepository};

pub type AuthorRepository = SqlRepository<Author>;

#[async_trait]
impl Entity for Author {
    async fn fetch_all(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Author>(
            "SELECT id, username, email, alias, created_at FROM authors",
        )
        .fetch_all(pool)
        .await
    }

    async fn fetch_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Author>(
            "SELECT id, username, email, alias, created_at FROM authors WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    async fn exists(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
        let row: Option<(i64,)> = sqlx::query_as("SELECT 1 FROM authors WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.is_some())
    }

    async fn insert_row(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
    ) -> Result<SqliteQueryResult, sqlx::Error> {
        sqlx::query("INSERT INTO authors (username, email, alias) VALUES (?, ?, ?)")
            .bind(&self.username)
            .bind(&self.email)
            .bind(&self.alias)
            .execute(&mut **tx)
            .await
    }

    async fn update_row(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
    ) -> Result<SqliteQueryResult, sqlx::Error> {
        sqlx::query("UPDATE authors SET username = ?, email = ?, alias = ? WHERE id = ?")
            .bind(&self.username)
            .bind(&self.email)
            .bind(&self.alias)
            .bind(self.id)
            .execute(&mut **tx)
            .await
    }

    async fn delete_row(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
    ) -> Result<SqliteQueryResult, sqlx::Error> {
        sqlx::query("DELETE FROM authors WHERE id = ?")
            .bind(self.id)
            .execute(&mut **tx)
            .await
    }
}
