use axum::{routing::get, Router};

use super::handlers;

/// Creates the authors router with all author CRUD routes
pub fn authors_routes() -> Router {
    Router::new()
        .route(
            "/api/authors",
            get(handlers::get_authors).post(handlers::create_author),
        )
        .route(
            "/api/authors/:id",
            get(handlers::get_author_by_id)
                .put(handlers::update_author)
                .delete(handlers::delete_author),
        )
}
