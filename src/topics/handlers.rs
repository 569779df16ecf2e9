use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

use super::models::{CreateTopicRequest, Topic, UpdateTopicRequest};
use super::repository::TopicRepository;
use crate::auth::AuthedUser;
use crate::common::{ApiError, AppState, Repository, Validator};

/// GET /api/topics - Get all topics with their articles
pub async fn get_topics(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let repository = TopicRepository::new(app_state.db.clone());

    let topics = repository.find_all().await?;

    Ok(Json(topics))
}

/// GET /api/topics/:id - Get topic by id, articles included
pub async fn get_topic_by_id(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let repository = TopicRepository::new(app_state.db.clone());

    let topic = repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Topic not found".to_string()))?;

    Ok(Json(topic))
}

/// POST /api/topics - Create a new topic
pub async fn create_topic(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    user: AuthedUser,
    Json(request): Json<CreateTopicRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let validation = request.validate();
    if !validation.is_valid {
        return Err(ApiError::from(validation));
    }

    let app_state = state.read().await;
    let mut repository = TopicRepository::new(app_state.db.clone());

    let topic = Topic {
        id: 0,
        title: request.title,
        description: request.description,
        articles: Vec::new(),
    };

    if !repository.create(topic).await? {
        return Err(ApiError::InternalServer("topic creation failed".to_string()));
    }

    let created = match repository.last_insert_id() {
        Some(id) => repository.find_by_id(id).await?,
        None => None,
    };
    let created =
        created.ok_or_else(|| ApiError::InternalServer("created topic not found".to_string()))?;

    info!(topic_id = created.id, user_id = user.id, "Created topic");

    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/topics/:id - Update a topic
pub async fn update_topic(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    user: AuthedUser,
    Path(id): Path<i64>,
    Json(request): Json<UpdateTopicRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if id < 1 || id != request.id {
        warn!(topic_id = id, "Update rejected: bad id");
        return Err(ApiError::BadRequest("id mismatch".to_string()));
    }

    let validation = request.validate();
    if !validation.is_valid {
        return Err(ApiError::from(validation));
    }

    let app_state = state.read().await;
    let mut repository = TopicRepository::new(app_state.db.clone());

    if !repository.is_exists(id).await? {
        return Err(ApiError::NotFound("Topic not found".to_string()));
    }

    let topic = Topic {
        id,
        title: request.title,
        description: request.description,
        articles: Vec::new(),
    };

    if !repository.update(topic).await? {
        return Err(ApiError::InternalServer("topic update failed".to_string()));
    }

    info!(topic_id = id, user_id = user.id, "Updated topic");

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/topics/:id - Delete a topic
pub async fn delete_topic(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    user: AuthedUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    if id < 1 {
        return Err(ApiError::BadRequest("invalid id".to_string()));
    }

    let app_state = state.read().await;
    let mut repository = TopicRepository::new(app_state.db.clone());

    let topic = repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Topic not found".to_string()))?;

    if !repository.delete(topic).await? {
        return Err(ApiError::InternalServer("topic delete failed".to_string()));
    }

    info!(topic_id = id, user_id = user.id, "Deleted topic");

    Ok(StatusCode::NO_CONTENT)
}
