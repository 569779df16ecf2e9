use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::articles::Article;
use crate::common::{ValidationResult, Validator};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Topic {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    /// Related articles, filled by the repository's eager load. Not a column.
    #[sqlx(skip)]
    #[serde(default)]
    pub articles: Vec<Article>,
}

#[derive(Debug, Deserialize)]
pub struct CreateTopicRequest {
    pub title: String,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTopicRequest {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
}

impl Validator for CreateTopicRequest {
    fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::new();

        if self.title.trim().is_empty() {
            result.add_error("title", "Title is required");
        }
        if self.title.len() > 100 {
            result.add_error("title", "Title must be at most 100 characters");
        }
        if let Some(description) = &self.description {
            if description.len() > 500 {
                result.add_error("description", "Description must be at most 500 characters");
            }
        }

        result
    }
}

impl Validator for UpdateTopicRequest {
    fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::new();

        if self.title.trim().is_empty() {
            result.add_error("title", "Title is required");
        }
        if self.title.len() > 100 {
            result.add_error("title", "Title must be at most 100 characters");
        }
        if let Some(description) = &self.description {
            if description.len() > 500 {
                result.add_error("description", "Description must be at most 500 characters");
            }
        }

        result
    }
}
