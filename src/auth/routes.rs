//! Authentication routes

use axum::{routing::post, Router};

use super::handlers;

/// Creates and returns the authentication router
///
/// # Routes
/// - `POST /api/users/login` - Exchange credentials for an access token
pub fn auth_routes() -> Router {
    Router::new().route("/api/users/login", post(handlers::login))
}
