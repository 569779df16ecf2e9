use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

use super::models::{Author, CreateAuthorRequest, UpdateAuthorRequest};
use super::repository::AuthorRepository;
use crate::auth::AuthedUser;
use crate::common::{ApiError, AppState, Repository, Validator};

/// GET /api/authors - Get all authors
pub async fn get_authors(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let repository = AuthorRepository::new(app_state.db.clone());

    let authors = repository.find_all().await?;

    Ok(Json(authors))
}

/// GET /api/authors/:id - Get author by id
pub async fn get_author_by_id(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let repository = AuthorRepository::new(app_state.db.clone());

    let author = repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Author not found".to_string()))?;

    Ok(Json(author))
}

/// POST /api/authors - Create a new author
pub async fn create_author(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    user: AuthedUser,
    Json(request): Json<CreateAuthorRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let validation = request.validate();
    if !validation.is_valid {
        return Err(ApiError::from(validation));
    }

    let app_state = state.read().await;
    let mut repository = AuthorRepository::new(app_state.db.clone());

    let author = Author {
        id: 0,
        username: request.username,
        email: request.email,
        alias: request.alias,
        created_at: None,
    };

    if !repository.create(author).await? {
        return Err(ApiError::InternalServer("author creation failed".to_string()));
    }

    let created = match repository.last_insert_id() {
        Some(id) => repository.find_by_id(id).await?,
        None => None,
    };
    let created =
        created.ok_or_else(|| ApiError::InternalServer("created author not found".to_string()))?;

    info!(author_id = created.id, user_id = user.id, "Created author");

    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/authors/:id - Update an author
pub async fn update_author(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    user: AuthedUser,
    Path(id): Path<i64>,
    Json(request): Json<UpdateAuthorRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if id < 1 || id != request.id {
        warn!(author_id = id, "Update rejected: bad id");
        return Err(ApiError::BadRequest("id mismatch".to_string()));
    }

    let validation = request.validate();
    if !validation.is_valid {
        return Err(ApiError::from(validation));
    }

    let app_state = state.read().await;
    let mut repository = AuthorRepository::new(app_state.db.clone());

    if !repository.is_exists(id).await? {
        return Err(ApiError::NotFound("Author not found".to_string()));
    }

    let author = Author {
        id,
        username: request.username,
        email: request.email,
        alias: request.alias,
        created_at: None,
    };

    if !repository.update(author).await? {
        return Err(ApiError::InternalServer("author update failed".to_string()));
    }

    info!(author_id = id, user_id = user.id, "Updated author");

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/authors/:id - Delete an author
pub async fn delete_author(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    user: AuthedUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    if id < 1 {
        return Err(ApiError::BadRequest("invalid id".to_string()));
    }

    let app_state = state.read().await;
    let mut repository = AuthorRepository::new(app_state.db.clone());

    let author = repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Author not found".to_string()))?;

    if !repository.delete(author).await? {
        return Err(ApiError::InternalServer("author delete failed".to_string()));
    }

    info!(author_id = id, user_id = user.id, "Deleted author");

    Ok(StatusCode::NO_CONTENT)
}
