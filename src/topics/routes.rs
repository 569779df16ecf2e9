use axum::{routing::get, Router};

use super::handlers;

/// Creates the topics router with all topic CRUD routes
pub fn topics_routes() -> Router {
    Router::new()
        .route(
            "/api/topics",
            get(handlers::get_topics).post(handlers::create_topic),
        )
        .route(
            "/api/topics/:id",
            get(handlers::get_topic_by_id)
                .put(handlers::update_topic)
                .delete(handlers::delete_topic),
        )
}
