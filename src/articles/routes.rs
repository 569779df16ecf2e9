use axum::{routing::get, Router};

use super::handlers;

/// Creates the articles router with all article CRUD routes
pub fn articles_routes() -> Router {
    Router::new()
        .route(
            "/api/articles",
            get(handlers::get_articles).post(handlers::create_article),
        )
        .route(
            "/api/articles/:id",
            get(handlers::get_article_by_id)
                .put(handlers::update_article)
                .delete(handlers::delete_article),
        )
}
