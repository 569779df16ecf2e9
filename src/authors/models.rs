use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::common::{ValidationResult, Validator};

/// Wire-facing author record. The credential hash is deliberately absent.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Author {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub alias: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateAuthorRequest {
    pub username: String,
    pub email: String,
    pub alias: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateAuthorRequest {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub alias: Option<String>,
}

fn validate_author_fields(username: &str, email: &str) -> ValidationResult {
    let mut result = ValidationResult::new();

    if username.trim().is_empty() {
        result.add_error("username", "Username is required");
    }
    if username.len() > 50 {
        result.add_error("username", "Username must be at most 50 characters");
    }
    if !email.contains('@') {
        result.add_error("email", "A valid email address is required");
    }

    result
}

impl Validator for CreateAuthorRequest {
    fn validate(&self) -> ValidationResult {
        validate_author_fields(&self.username, &self.email)
    }
}

impl Validator for UpdateAuthorRequest {
    fn validate(&self) -> ValidationResult {
        validate_author_fields(&self.username, &self.email)
    }
}
