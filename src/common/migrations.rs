//! Database schema management
//!
//! Tables are created if missing at startup; there is no migration history
//! to preserve for this schema.

use sqlx::SqlitePool;
use tracing::info;

/// Create all tables and indexes if they do not exist yet.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    create_identity_tables(pool).await?;
    create_content_tables(pool).await?;
    create_indexes(pool).await?;

    info!("Database migration completed");

    Ok(())
}

/// Authors double as identities: the same row backs the Authors CRUD surface
/// and the credential store. `password_hash` is an argon2 PHC string and is
/// NULL for authors provisioned without login credentials.
async fn create_identity_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS authors (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT NOT NULL UNIQUE,
            email TEXT NOT NULL,
            alias TEXT,
            password_hash TEXT,
            created_at TEXT NOT NULL DEFAULT (datetime('now'))
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS roles (
            name TEXT PRIMARY KEY
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS author_roles (
            author_id INTEGER NOT NULL REFERENCES authors(id),
            role TEXT NOT NULL REFERENCES roles(name),
            PRIMARY KEY (author_id, role)
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_content_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS topics (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            description TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS articles (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            body TEXT NOT NULL,
            created_at TEXT NOT NULL DEFAULT (datetime('now')),
            votes INTEGER NOT NULL DEFAULT 0,
            topic_id INTEGER NOT NULL REFERENCES topics(id),
            author_id INTEGER NOT NULL REFERENCES authors(id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_indexes(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_articles_topic_id ON articles(topic_id)")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_articles_author_id ON articles(author_id)")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_author_roles_author_id ON author_roles(author_id)")
        .execute(pool)
        .await?;

    Ok(())
}
