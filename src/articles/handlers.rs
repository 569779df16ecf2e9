use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

use super::models::{Article, CreateArticleRequest, UpdateArticleRequest};
use super::repository::ArticleRepository;
use crate::auth::AuthedUser;
use crate::common::{ApiError, AppState, Repository, Validator};

/// GET /api/articles - Get all articles
pub async fn get_articles(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let repository = ArticleRepository::new(app_state.db.clone());

    let articles = repository.find_all().await?;

    Ok(Json(articles))
}

/// GET /api/articles/:id - Get article by id
pub async fn get_article_by_id(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let repository = ArticleRepository::new(app_state.db.clone());

    let article = repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Article not found".to_string()))?;

    Ok(Json(article))
}

/// POST /api/articles - Create a new article
pub async fn create_article(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    user: AuthedUser,
    Json(request): Json<CreateArticleRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let validation = request.validate();
    if !validation.is_valid {
        return Err(ApiError::from(validation));
    }

    let app_state = state.read().await;
    let mut repository = ArticleRepository::new(app_state.db.clone());

    let article = Article {
        id: 0,
        title: request.title,
        body: request.body,
        created_at: request.created_at,
        votes: request.votes.unwrap_or(0),
        topic_id: request.topic_id,
        author_id: request.author_id,
    };

    if !repository.create(article).await? {
        return Err(ApiError::InternalServer("article creation failed".to_string()));
    }

    let created = match repository.last_insert_id() {
        Some(id) => repository.find_by_id(id).await?,
        None => None,
    };
    let created = created
        .ok_or_else(|| ApiError::InternalServer("created article not found".to_string()))?;

    info!(article_id = created.id, user_id = user.id, "Created article");

    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/articles/:id - Update an article
pub async fn update_article(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    user: AuthedUser,
    Path(id): Path<i64>,
    Json(request): Json<UpdateArticleRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if id < 1 || id != request.id {
        warn!(article_id = id, "Update rejected: bad id");
        return Err(ApiError::BadRequest("id mismatch".to_string()));
    }

    let validation = request.validate();
    if !validation.is_valid {
        return Err(ApiError::from(validation));
    }

    let app_state = state.read().await;
    let mut repository = ArticleRepository::new(app_state.db.clone());

    if !repository.is_exists(id).await? {
        return Err(ApiError::NotFound("Article not found".to_string()));
    }

    let existing = repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Article not found".to_string()))?;

    let article = Article {
        id,
        title: request.title,
        body: request.body,
        created_at: existing.created_at,
        votes: request.votes.unwrap_or(existing.votes),
        topic_id: request.topic_id,
        author_id: existing.author_id,
    };

    if !repository.update(article).await? {
        return Err(ApiError::InternalServer("article update failed".to_string()));
    }

    info!(article_id = id, user_id = user.id, "Updated article");

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/articles/:id - Delete an article
pub async fn delete_article(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    user: AuthedUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    if id < 1 {
        return Err(ApiError::BadRequest("invalid id".to_string()));
    }

    let app_state = state.read().await;
    let mut repository = ArticleRepository::new(app_state.db.clone());

    let article = repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Article not found".to_string()))?;

    if !repository.delete(article).await? {
        return Err(ApiError::InternalServer("article delete failed".to_string()));
    }

    info!(article_id = id, user_id = user.id, "Deleted article");

    Ok(StatusCode::NO_CONTENT)
}
