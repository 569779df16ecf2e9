//! JWT token issuance and verification

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use super::models::{Claims, Identity};
use crate::common::ApiError;

/// Default token validity window in hours.
pub const DEFAULT_VALIDITY_HOURS: i64 = 3;

/// Builds and signs access tokens (HS256) and verifies presented ones.
///
/// The upstream system uses the configured issuer value as both `iss` and
/// `aud`; that choice is reproduced here rather than silently corrected.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
    validity: Duration,
}

impl TokenIssuer {
    /// A missing or empty signing key is a configuration fault: the process
    /// must refuse to start rather than issue unsigned tokens.
    pub fn new(key: &str, issuer: &str, validity_hours: i64) -> anyhow::Result<Self> {
        if key.trim().is_empty() {
            anyhow::bail!("JWT_KEY must be set and non-empty");
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(key.as_bytes()),
            decoding_key: DecodingKey::from_secret(key.as_bytes()),
            issuer: issuer.to_string(),
            validity: Duration::hours(validity_hours),
        })
    }

    /// Issues a signed token for a verified identity.
    ///
    /// Claim construction is deterministic for a given identity and instant,
    /// except for `jti` which is freshly random per issuance.
    pub fn issue(&self, identity: &Identity, roles: &[String]) -> Result<String, ApiError> {
        let now = Utc::now();
        let claims = Claims {
            sub: identity.email.clone(),
            jti: Uuid::new_v4().to_string(),
            uid: identity.id,
            roles: roles.to_vec(),
            iss: self.issuer.clone(),
            aud: self.issuer.clone(),
            iat: now.timestamp(),
            exp: (now + self.validity).timestamp(),
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &self.encoding_key,
        )
        .map_err(|e| ApiError::InternalServer(format!("token signing failed: {}", e)))
    }

    /// Verifies signature, expiry, issuer and audience of a presented token.
    pub fn verify(&self, token: &str) -> Result<Claims, ApiError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.issuer]);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|_| ApiError::Unauthorized("invalid token".to_string()))
    }
}
