// Application state shared across all modules

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::auth::TokenIssuer;

/// Application state containing the database pool and the token issuer.
/// Both are read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub token_issuer: Arc<TokenIssuer>,
}
