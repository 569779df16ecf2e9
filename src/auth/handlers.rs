//! Authentication handlers

use axum::extract::{Extension, Json};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use super::models::{LoginRequest, LoginResponse};
use super::service::AuthService;
use crate::common::{ApiError, AppState};

/// POST /api/users/login
/// Exchanges a username/password pair for a signed access token.
///
/// # Request Body
/// ```json
/// {
///   "username": "admin",
///   "password": "..."
/// }
/// ```
///
/// # Response
/// ```json
/// {
///   "token": "<jwt token>"
/// }
/// ```
pub async fn login(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    info!("Login attempt received");

    let state = state_lock.read().await.clone();
    let auth_service = AuthService::new(state.db.clone(), state.token_issuer.clone());

    let token = auth_service
        .login(&payload.username, &payload.password)
        .await?;

    Ok(Json(LoginResponse { token }))
}
