//! Topic persistence with eager-loaded Articles.

use async_trait::async_trait;
use sqlx::sqlite::SqliteQueryResult;
use sqlx::{Sqlite, SqlitePool, Transaction};
use std::collections::HashMap;

use super::models::Topic;
use crate::articles::Article;
use crate::common::{Entity, SqlRepository};

pub type TopicRepository = SqlRepository<Topic>;

#[async_trait]
impl Entity for Topic {
    async fn fetch_all(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        let mut topics = sqlx::query_as::<_, Topic>(
            "SELECT id, title, description FROM topics",
        )
        .fetch_all(pool)
        .await?;

        // One query for all related articles, grouped in memory.
        let articles = sqlx::query_as::<_, Article>(
            r#"
            SELECT id, title, body, created_at, votes, topic_id, author_id
            FROM articles
            "#,
        )
        .fetch_all(pool)
        .await?;

        let mut by_topic: HashMap<i64, Vec<Article>> = HashMap::new();
        for article in articles {
            by_topic.entry(article.topic_id).or_default().push(article);
        }
        for topic in &mut topics {
            topic.articles = by_topic.remove(&topic.id).unwrap_or_default();
        }

        Ok(topics)
    }

    async fn fetch_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let topic = sqlx::query_as::<_, Topic>(
            "SELECT id, title, description FROM topics WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        let mut topic = match topic {
            Some(topic) => topic,
            None => return Ok(None),
        };

        topic.articles = sqlx::query_as::<_, Article>(
            r#"
            SELECT id, title, body, created_at, votes, topic_id, author_id
            FROM articles
            WHERE topic_id = ?
            "#,
        )
        .bind(id)
        .fetch_all(pool)
        .await?;

        Ok(Some(topic))
    }

    async fn exists(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
        let row: Option<(i64,)> = sqlx::query_as("SELECT 1 FROM topics WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.is_some())
    }

    async fn insert_row(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
    ) -> Result<SqliteQueryResult, sqlx::Error> {
        sqlx::query("INSERT INTO topics (title, description) VALUES (?, ?)")
            .bind(&self.title)
            .bind(&self.description)
            .execute(&mut **tx)
            .await
    }

    async fn update_row(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
    ) -> Result<SqliteQueryResult, sqlx::Error> {
        sqlx::query("UPDATE topics SET title = ?, description = ? WHERE id = ?")
            .bind(&self.title)
            .bind(&self.description)
            .bind(self.id)
            .execute(&mut **tx)
            .await
    }

    async fn delete_row(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
    ) -> Result<SqliteQueryResult, sqlx::Error> {
        sqlx::query("DELETE FROM topics WHERE id = ?")
            .bind(self.id)
            .execute(&mut **tx)
            .await
    }
}
