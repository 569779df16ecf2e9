//! Tests for topics module
//!
//! These tests verify topic validation and the repository contract:
//! eager-loaded articles, absent-id semantics and `save` affected-row
//! reporting.

#[cfg(test)]
mod tests {
    use super::super::*;
    use sqlx::sqlite::SqlitePoolOptions;
    use sqlx::SqlitePool;

    use super::super::models::{CreateTopicRequest, UpdateTopicRequest};
    use crate::common::{migrations, Repository, Validator};

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("in-memory pool");
        migrations::run_migrations(&pool).await.expect("migrations");
        pool
    }

    fn topic(title: &str, description: Option<&str>) -> Topic {
        Topic {
            id: 0,
            title: title.to_string(),
            description: description.map(str::to_string),
            articles: Vec::new(),
        }
    }

    #[test]
    fn test_create_topic_validation_success() {
        let request = CreateTopicRequest {
            title: "Tech".to_string(),
            description: Some("All things technology".to_string()),
        };

        assert!(request.validate().is_valid);
    }

    #[test]
    fn test_create_topic_validation_empty_title() {
        let request = CreateTopicRequest {
            title: "".to_string(),
            description: None,
        };

        let result = request.validate();
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.field == "title"));
    }

    #[test]
    fn test_update_topic_validation_title_too_long() {
        let request = UpdateTopicRequest {
            id: 1,
            title: "a".repeat(101),
            description: None,
        };

        let result = request.validate();
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.field == "title"));
    }

    #[tokio::test]
    async fn test_created_topic_has_empty_articles_collection() {
        let pool = test_pool().await;
        let mut repository = TopicRepository::new(pool);

        let created = repository
            .create(topic("Tech", Some("...")))
            .await
            .expect("create");
        assert!(created);

        let id = repository.last_insert_id().expect("insert id");
        let fetched = repository
            .find_by_id(id)
            .await
            .expect("no fault")
            .expect("present");

        assert_eq!(fetched.title, "Tech");
        assert!(fetched.articles.is_empty(), "new topic has no articles yet");
    }

    #[tokio::test]
    async fn test_find_by_id_absent_returns_none() {
        let pool = test_pool().await;
        let repository = TopicRepository::new(pool);

        let fetched = repository.find_by_id(9999).await.expect("no fault");
        assert!(fetched.is_none());
    }

    #[tokio::test]
    async fn test_is_exists_does_not_error_for_missing_id() {
        let pool = test_pool().await;
        let mut repository = TopicRepository::new(pool);

        assert!(!repository.is_exists(1).await.expect("no fault"));

        repository.create(topic("Tech", None)).await.expect("create");
        let id = repository.last_insert_id().unwrap();

        assert!(repository.is_exists(id).await.expect("no fault"));
    }

    #[tokio::test]
    async fn test_save_reports_whether_rows_were_affected() {
        let pool = test_pool().await;
        let mut repository = TopicRepository::new(pool);

        // Nothing staged: no rows affected.
        assert!(!repository.save().await.expect("no fault"));

        // Update against an id that does not exist affects zero rows.
        let phantom = Topic {
            id: 9999,
            title: "Ghost".to_string(),
            description: None,
            articles: Vec::new(),
        };
        assert!(!repository.update(phantom).await.expect("no fault"));

        // A real insert affects a row.
        assert!(repository.create(topic("Tech", None)).await.expect("create"));
    }

    #[tokio::test]
    async fn test_find_all_eager_loads_articles() {
        let pool = test_pool().await;
        let mut repository = TopicRepository::new(pool.clone());

        repository.create(topic("Tech", None)).await.expect("create");
        let topic_id = repository.last_insert_id().unwrap();

        sqlx::query(
            "INSERT INTO authors (username, email) VALUES ('writer', 'writer@ncnews.com')",
        )
        .execute(&pool)
        .await
        .expect("insert author");
        sqlx::query(
            "INSERT INTO articles (title, body, topic_id, author_id) VALUES ('Hello', 'World', ?, 1)",
        )
        .bind(topic_id)
        .execute(&pool)
        .await
        .expect("insert article");

        let topics = repository.find_all().await.expect("find_all");
        let fetched = topics.iter().find(|t| t.id == topic_id).expect("present");

        assert_eq!(fetched.articles.len(), 1);
        assert_eq!(fetched.articles[0].title, "Hello");
    }

    #[tokio::test]
    async fn test_delete_removes_fetched_topic() {
        let pool = test_pool().await;
        let mut repository = TopicRepository::new(pool);

        repository.create(topic("Tech", None)).await.expect("create");
        let id = repository.last_insert_id().unwrap();

        let fetched = repository
            .find_by_id(id)
            .await
            .expect("no fault")
            .expect("present");
        assert!(repository.delete(fetched).await.expect("delete"));
        assert!(repository.find_by_id(id).await.expect("no fault").is_none());
    }
}
