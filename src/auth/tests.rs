//! Tests for auth module
//!
//! These tests verify core authentication functionality including:
//! - Token issuance and verification
//! - Claim construction (subject, roles, freshness)
//! - Credential verification and rejection indistinguishability

#[cfg(test)]
mod tests {
    use super::super::*;
    use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
    use sqlx::sqlite::SqlitePoolOptions;
    use sqlx::SqlitePool;
    use std::sync::Arc;

    use super::super::models::{Claims, Identity};
    use crate::common::{migrations, seed, ApiError};

    const TEST_KEY: &str = "test_secret_key_for_unit_tests";
    const TEST_ISSUER: &str = "NCNews";

    fn test_issuer() -> TokenIssuer {
        TokenIssuer::new(TEST_KEY, TEST_ISSUER, 3).expect("issuer should construct")
    }

    fn test_identity() -> Identity {
        Identity {
            id: 42,
            username: "admin".to_string(),
            email: "admin@ncnews.com".to_string(),
            password_hash: None,
        }
    }

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("in-memory pool");
        migrations::run_migrations(&pool).await.expect("migrations");
        seed::seed(&pool).await.expect("seed");
        pool
    }

    #[test]
    fn test_empty_key_is_a_startup_fault() {
        assert!(TokenIssuer::new("", TEST_ISSUER, 3).is_err());
        assert!(TokenIssuer::new("   ", TEST_ISSUER, 3).is_err());
    }

    #[test]
    fn test_issued_token_carries_subject_and_roles() {
        let issuer = test_issuer();
        let identity = test_identity();
        let roles = vec!["Admin".to_string(), "Business User".to_string()];

        let token = issuer.issue(&identity, &roles).expect("issue");
        let claims = issuer.verify(&token).expect("verify");

        assert_eq!(claims.sub, identity.email);
        assert_eq!(claims.uid, identity.id);

        // Role claims equal the assigned set, order-independent.
        let mut got = claims.roles.clone();
        let mut want = roles.clone();
        got.sort();
        want.sort();
        assert_eq!(got, want);

        // Issuer and audience are the same configured value.
        assert_eq!(claims.iss, TEST_ISSUER);
        assert_eq!(claims.aud, TEST_ISSUER);
        assert_eq!(claims.exp - claims.iat, 3 * 3600);
    }

    #[test]
    fn test_zero_roles_is_a_valid_claim_set() {
        let issuer = test_issuer();
        let token = issuer.issue(&test_identity(), &[]).expect("issue");
        let claims = issuer.verify(&token).expect("verify");
        assert!(claims.roles.is_empty());
    }

    #[test]
    fn test_two_issuances_never_produce_identical_tokens() {
        let issuer = test_issuer();
        let identity = test_identity();
        let roles = vec!["Admin".to_string()];

        let first = issuer.issue(&identity, &roles).expect("issue");
        let second = issuer.issue(&identity, &roles).expect("issue");

        assert_ne!(first, second, "jti must make every issuance unique");

        let a = issuer.verify(&first).expect("first verifies");
        let b = issuer.verify(&second).expect("second verifies");
        assert_ne!(a.jti, b.jti);
    }

    #[test]
    fn test_expired_token_fails_verification() {
        let issuer = test_issuer();
        let identity = test_identity();

        // Hand-roll a token with the same key whose expiry is well past the
        // validation leeway.
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: identity.email.clone(),
            jti: "expired-token".to_string(),
            uid: identity.id,
            roles: vec![],
            iss: TEST_ISSUER.to_string(),
            aud: TEST_ISSUER.to_string(),
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(TEST_KEY.as_bytes()),
        )
        .expect("encode");

        assert!(issuer.verify(&token).is_err());
    }

    #[test]
    fn test_verification_fails_with_wrong_key() {
        let issuer = test_issuer();
        let other = TokenIssuer::new("a_completely_different_key", TEST_ISSUER, 3).unwrap();

        let token = issuer.issue(&test_identity(), &[]).expect("issue");

        assert!(other.verify(&token).is_err());
        assert!(issuer.verify(&token).is_ok());
    }

    #[tokio::test]
    async fn test_seeded_admin_login_yields_admin_role_claim() {
        let pool = test_pool().await;
        let issuer = Arc::new(test_issuer());
        let service = AuthService::new(pool, issuer.clone());

        let token = service.login("admin", "P@ssword1").await.expect("login");
        let claims = issuer.verify(&token).expect("verify");

        assert_eq!(claims.sub, "admin@ncnews.com");
        assert!(claims.roles.contains(&"Admin".to_string()));
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_username_are_indistinguishable() {
        let pool = test_pool().await;
        let service = AuthService::new(pool, Arc::new(test_issuer()));

        let wrong_password = service.login("admin", "wrong").await.unwrap_err();
        let unknown_user = service.login("nobody", "P@ssword1").await.unwrap_err();

        let wrong_password = match wrong_password {
            ApiError::Unauthorized(msg) => msg,
            other => panic!("expected Unauthorized, got {}", other),
        };
        let unknown_user = match unknown_user {
            ApiError::Unauthorized(msg) => msg,
            other => panic!("expected Unauthorized, got {}", other),
        };

        assert_eq!(wrong_password, unknown_user);
    }

    #[tokio::test]
    async fn test_identity_without_credentials_cannot_log_in() {
        let pool = test_pool().await;

        sqlx::query("INSERT INTO authors (username, email) VALUES ('ghost', 'ghost@ncnews.com')")
            .execute(&pool)
            .await
            .expect("insert");

        let service = AuthService::new(pool, Arc::new(test_issuer()));
        let outcome = service.verify_credentials("ghost", "anything").await;

        assert!(matches!(outcome, Ok(None)));
    }

    #[tokio::test]
    async fn test_verify_credentials_returns_identity_on_match() {
        let pool = test_pool().await;
        let service = AuthService::new(pool, Arc::new(test_issuer()));

        let identity = service
            .verify_credentials("admin", "P@ssword1")
            .await
            .expect("no fault")
            .expect("match");

        assert_eq!(identity.username, "admin");
        assert_eq!(identity.email, "admin@ncnews.com");
    }
}
