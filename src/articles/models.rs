use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::common::{ValidationResult, Validator};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub created_at: Option<String>,
    pub votes: i64,
    pub topic_id: i64,
    pub author_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct CreateArticleRequest {
    pub title: String,
    pub body: String,
    pub topic_id: i64,
    pub author_id: i64,
    pub votes: Option<i64>,
    pub created_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateArticleRequest {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub topic_id: i64,
    pub votes: Option<i64>,
}

impl Validator for CreateArticleRequest {
    fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::new();

        if self.title.trim().is_empty() {
            result.add_error("title", "Title is required");
        }
        if self.title.len() > 50 {
            result.add_error("title", "Title must be at most 50 characters");
        }
        if self.body.trim().is_empty() {
            result.add_error("body", "Body is required");
        }
        if self.topic_id < 1 {
            result.add_error("topic_id", "A valid topic id is required");
        }
        if self.author_id < 1 {
            result.add_error("author_id", "A valid author id is required");
        }

        result
    }
}

impl Validator for UpdateArticleRequest {
    fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::new();

        if self.title.trim().is_empty() {
            result.add_error("title", "Title is required");
        }
        if self.title.len() > 50 {
            result.add_error("title", "Title must be at most 50 characters");
        }
        if self.body.trim().is_empty() {
            result.add_error("body", "Body is required");
        }
        if self.topic_id < 1 {
            result.add_error("topic_id", "A valid topic id is required");
        }

        result
    }
}
