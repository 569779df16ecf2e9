//! Article persistence: flat rows, no eager-loaded relations.

use async_trait::async_trait;
use sqlx::sqlite::SqliteQueryResult;
use sqlx::{Sqlite, SqlitePool, Transaction};

use super::models::Article;
use crate::common::{Entity, SqlRepository};

pub type ArticleRepository = SqlRepository<Article>;

#[async_trait]
impl Entity for Article {
    async fn fetch_all(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Article>(
            r#"
            SELECT id, title, body, created_at, votes, topic_id, author_id
            FROM articles
            "#,
        )
        .fetch_all(pool)
        .await
    }

    async fn fetch_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Article>(
            r#"
            SELECT id, title, body, created_at, votes, topic_id, author_id
            FROM articles
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    async fn exists(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
        let row: Option<(i64,)> = sqlx::query_as("SELECT 1 FROM articles WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.is_some())
    }

    async fn insert_row(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
    ) -> Result<SqliteQueryResult, sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO articles (title, body, created_at, votes, topic_id, author_id)
            VALUES (?, ?, COALESCE(?, datetime('now')), ?, ?, ?)
            "#,
        )
        .bind(&self.title)
        .bind(&self.body)
        .bind(&self.created_at)
        .bind(self.votes)
        .bind(self.topic_id)
        .bind(self.author_id)
        .execute(&mut **tx)
        .await
    }

    async fn update_row(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
    ) -> Result<SqliteQueryResult, sqlx::Error> {
        sqlx::query(
            r#"
            UPDATE articles
            SET title = ?, body = ?, votes = ?, topic_id = ?
            WHERE id = ?
            "#,
        )
        .bind(&self.title)
        .bind(&self.body)
        .bind(self.votes)
        .bind(self.topic_id)
        .bind(self.id)
        .execute(&mut **tx)
        .await
    }

    async fn delete_row(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
    ) -> Result<SqliteQueryResult, sqlx::Error> {
        sqlx::query("DELETE FROM articles WHERE id = ?")
            .bind(self.id)
            .execute(&mut **tx)
            .await
    }
}
