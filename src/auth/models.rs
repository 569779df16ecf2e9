//! Authentication data models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// JWT claims structure
///
/// `jti` is freshly random per issuance, so two tokens for the same identity
/// are never byte-identical even when every timestamp coincides.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Claims {
    /// Subject: the identity's email.
    pub sub: String,
    /// Unique token identifier (UUID v4).
    pub jti: String,
    /// Stable user identifier.
    pub uid: i64,
    /// Assigned role names, one entry per role. Order carries no meaning.
    #[serde(default)]
    pub roles: Vec<String>,
    pub iss: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

/// Identity record as read by the credential store. Never serialized to the
/// wire; the stored hash stays inside the auth module.
#[derive(FromRow, Debug)]
pub struct Identity {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: Option<String>,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
}
