//! Authentication service
//!
//! Orchestrates the credential store and the token issuer: a login request
//! either comes back with a signed token, is rejected as unauthorized, or
//! fails with an internal fault. Rejection never reveals which half of the
//! credential was wrong, and store or signing faults are never reported as
//! a rejection.

use argon2::password_hash::Error as HashError;
use argon2::{Argon2, PasswordHash, PasswordVerifier};
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::{info, warn};

use super::models::Identity;
use super::token::TokenIssuer;
use crate::common::ApiError;

pub struct AuthService {
    db: SqlitePool,
    token_issuer: Arc<TokenIssuer>,
}

impl AuthService {
    pub fn new(db: SqlitePool, token_issuer: Arc<TokenIssuer>) -> Self {
        Self { db, token_issuer }
    }

    /// Verifies a username/password pair against the identity store.
    ///
    /// Returns `Ok(None)` for unknown username, missing credential material
    /// and wrong password alike; the outcomes are indistinguishable to the
    /// caller. Username matching uses SQLite's default BINARY collation, so
    /// lookup is case-sensitive. The plaintext is never stored or logged.
    pub async fn verify_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<Identity>, ApiError> {
        let identity: Option<Identity> = sqlx::query_as(
            "SELECT id, username, email, password_hash FROM authors WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        let identity = match identity {
            Some(identity) => identity,
            None => return Ok(None),
        };

        let stored = match identity.password_hash.as_deref() {
            Some(hash) => hash,
            // Identity exists but was provisioned without credentials.
            None => return Ok(None),
        };

        let parsed = PasswordHash::new(stored).map_err(|e| {
            ApiError::InternalServer(format!("stored credential hash is malformed: {}", e))
        })?;

        match Argon2::default().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(Some(identity)),
            Err(HashError::Password) => Ok(None),
            Err(e) => Err(ApiError::InternalServer(format!(
                "password verification failed: {}",
                e
            ))),
        }
    }

    /// Role names assigned to an identity. Zero roles is a valid state.
    pub async fn roles(&self, author_id: i64) -> Result<Vec<String>, ApiError> {
        let rows: Vec<(String,)> =
            sqlx::query_as("SELECT role FROM author_roles WHERE author_id = ?")
                .bind(author_id)
                .fetch_all(&self.db)
                .await
                .map_err(ApiError::DatabaseError)?;

        Ok(rows.into_iter().map(|(role,)| role).collect())
    }

    /// Full login flow: verify credentials, load roles, issue a token.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, ApiError> {
        let identity = match self.verify_credentials(username, password).await? {
            Some(identity) => identity,
            None => {
                warn!("Login rejected");
                return Err(ApiError::Unauthorized(
                    "invalid username or password".to_string(),
                ));
            }
        };

        let roles = self.roles(identity.id).await?;
        let token = self.token_issuer.issue(&identity, &roles)?;

        info!(user_id = identity.id, "Login successful");

        Ok(token)
    }
}
