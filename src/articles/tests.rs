//! Tests for articles module

#[cfg(test)]
mod tests {
    use super::super::*;
    use sqlx::sqlite::SqlitePoolOptions;
    use sqlx::SqlitePool;

    use super::super::models::{CreateArticleRequest, UpdateArticleRequest};
    use crate::common::{migrations, Repository, Validator};

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("in-memory pool");
        migrations::run_migrations(&pool).await.expect("migrations");

        // Every article needs a topic and an author to point at.
        sqlx::query("INSERT INTO topics (title) VALUES ('Tech')")
            .execute(&pool)
            .await
            .expect("insert topic");
        sqlx::query("INSERT INTO authors (username, email) VALUES ('writer', 'writer@ncnews.com')")
            .execute(&pool)
            .await
            .expect("insert author");

        pool
    }

    fn article(title: &str) -> Article {
        Article {
            id: 0,
            title: title.to_string(),
            body: "Body text".to_string(),
            created_at: None,
            votes: 0,
            topic_id: 1,
            author_id: 1,
        }
    }

    #[test]
    fn test_create_article_validation_success() {
        let request = CreateArticleRequest {
            title: "Rust ships".to_string(),
            body: "A new release".to_string(),
            topic_id: 1,
            author_id: 1,
            votes: None,
            created_at: None,
        };

        assert!(request.validate().is_valid);
    }

    #[test]
    fn test_create_article_validation_title_too_long() {
        let request = CreateArticleRequest {
            title: "a".repeat(51),
            body: "Body".to_string(),
            topic_id: 1,
            author_id: 1,
            votes: None,
            created_at: None,
        };

        let result = request.validate();
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.field == "title"));
    }

    #[test]
    fn test_create_article_validation_missing_body_and_refs() {
        let request = CreateArticleRequest {
            title: "Title".to_string(),
            body: "  ".to_string(),
            topic_id: 0,
            author_id: 0,
            votes: None,
            created_at: None,
        };

        let result = request.validate();
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.field == "body"));
        assert!(result.errors.iter().any(|e| e.field == "topic_id"));
        assert!(result.errors.iter().any(|e| e.field == "author_id"));
    }

    #[test]
    fn test_update_article_validation_empty_title() {
        let request = UpdateArticleRequest {
            id: 1,
            title: "".to_string(),
            body: "Body".to_string(),
            topic_id: 1,
            votes: None,
        };

        let result = request.validate();
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.field == "title"));
    }

    #[tokio::test]
    async fn test_create_then_fetch_round_trip() {
        let pool = test_pool().await;
        let mut repository = ArticleRepository::new(pool);

        assert!(repository.create(article("Hello")).await.expect("create"));
        let id = repository.last_insert_id().expect("insert id");

        let fetched = repository
            .find_by_id(id)
            .await
            .expect("no fault")
            .expect("present");
        assert_eq!(fetched.title, "Hello");
        assert_eq!(fetched.votes, 0);
        assert!(fetched.created_at.is_some(), "created_at defaults in the store");
    }

    #[tokio::test]
    async fn test_find_by_id_absent_returns_none() {
        let pool = test_pool().await;
        let repository = ArticleRepository::new(pool);

        assert!(repository.find_by_id(777).await.expect("no fault").is_none());
    }

    #[tokio::test]
    async fn test_is_exists_is_implemented_consistently() {
        let pool = test_pool().await;
        let mut repository = ArticleRepository::new(pool);

        assert!(!repository.is_exists(1).await.expect("no fault"));
        repository.create(article("Hello")).await.expect("create");
        assert!(repository
            .is_exists(repository.last_insert_id().unwrap())
            .await
            .expect("no fault"));
    }

    #[tokio::test]
    async fn test_update_changes_persisted_row() {
        let pool = test_pool().await;
        let mut repository = ArticleRepository::new(pool);

        repository.create(article("Before")).await.expect("create");
        let id = repository.last_insert_id().unwrap();

        let mut fetched = repository
            .find_by_id(id)
            .await
            .expect("no fault")
            .expect("present");
        fetched.title = "After".to_string();
        fetched.votes = 5;

        assert!(repository.update(fetched).await.expect("update"));

        let reread = repository
            .find_by_id(id)
            .await
            .expect("no fault")
            .expect("present");
        assert_eq!(reread.title, "After");
        assert_eq!(reread.votes, 5);
    }
}
