//! Startup seed data
//!
//! Ensures the default roles and the admin identity exist. Idempotent: an
//! already-seeded database is left untouched.

use argon2::password_hash::{rand_core::OsRng, SaltString};
use argon2::{Argon2, PasswordHasher};
use sqlx::SqlitePool;
use tracing::info;

const DEFAULT_ROLES: &[&str] = &["Admin", "Business User"];

pub async fn seed(pool: &SqlitePool) -> anyhow::Result<()> {
    seed_roles(pool).await?;
    seed_admin(pool).await?;
    Ok(())
}

async fn seed_roles(pool: &SqlitePool) -> anyhow::Result<()> {
    for role in DEFAULT_ROLES {
        sqlx::query("INSERT OR IGNORE INTO roles (name) VALUES (?)")
            .bind(role)
            .execute(pool)
            .await?;
    }
    Ok(())
}

async fn seed_admin(pool: &SqlitePool) -> anyhow::Result<()> {
    let existing: Option<(i64,)> = sqlx::query_as("SELECT id FROM authors WHERE email = ?")
        .bind("admin@ncnews.com")
        .fetch_optional(pool)
        .await?;

    if existing.is_some() {
        return Ok(());
    }

    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password("P@ssword1".as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("failed to hash seed password: {}", e))?
        .to_string();

    let result = sqlx::query(
        "INSERT INTO authors (username, email, password_hash) VALUES (?, ?, ?)",
    )
    .bind("admin")
    .bind("admin@ncnews.com")
    .bind(&password_hash)
    .execute(pool)
    .await?;

    sqlx::query("INSERT INTO author_roles (author_id, role) VALUES (?, 'Admin')")
        .bind(result.last_insert_rowid())
        .execute(pool)
        .await?;

    info!("Seeded admin identity");

    Ok(())
}
