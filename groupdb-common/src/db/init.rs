//! Database initialization
//!
//! Creates the database on first run and applies the schema. All CREATE
//! statements are idempotent (`IF NOT EXISTS`), so init is safe to call on
//! every startup.

use crate::Result;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use std::path::Path;
use tracing::info;

/// Initialize database connection and create tables if needed
pub async fn init_database(db_path: &Path) -> Result<SqlitePool> {
    let newly_created = !db_path.exists();

    // Create parent directory if it doesn't exist
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    // mode=rwc creates the database file if it doesn't exist
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect(&db_url)
        .await?;

    if newly_created {
        info!("Initialized new database: {}", db_path.display());
    } else {
        info!("Opened existing database: {}", db_path.display());
    }

    configure_connection(&pool).await?;
    create_schema(&pool).await?;

    Ok(pool)
}

/// In-memory database for tests: same schema, no file on disk
pub async fn init_memory_database() -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        // A single connection keeps every query on the same in-memory db
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;

    configure_connection(&pool).await?;
    create_schema(&pool).await?;

    Ok(pool)
}

async fn configure_connection(pool: &SqlitePool) -> Result<()> {
    // Child tables cascade on group deletion; foreign keys must be on
    sqlx::query("PRAGMA foreign_keys = ON").execute(pool).await?;

    // WAL allows concurrent readers with one writer
    sqlx::query("PRAGMA journal_mode = WAL").execute(pool).await?;

    sqlx::query("PRAGMA busy_timeout = 5000").execute(pool).await?;

    Ok(())
}

async fn create_schema(pool: &SqlitePool) -> Result<()> {
    create_groups_table(pool).await?;
    create_collection_table(pool, "group_labels").await?;
    create_collection_table(pool, "group_members").await?;
    create_collection_table(pool, "group_former_members").await?;
    create_collection_table(pool, "group_subunits").await?;
    create_collection_table(pool, "group_social_links").await?;
    Ok(())
}

/// Main entity table. Status is not stored: it is derived on read from
/// disband_year and the members table, so it can never drift.
async fn create_groups_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS groups (
            group_id TEXT PRIMARY KEY,
            group_name TEXT NOT NULL,
            agency TEXT NOT NULL,
            debut_year INTEGER NOT NULL,
            disband_year INTEGER NOT NULL DEFAULT 0
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// One ordered string collection per table: (group_id, position, value).
/// position preserves insertion order; duplicates are permitted.
async fn create_collection_table(pool: &SqlitePool, table: &str) -> Result<()> {
    let sql = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {table} (
            group_id TEXT NOT NULL REFERENCES groups(group_id) ON DELETE CASCADE,
            position INTEGER NOT NULL,
            value TEXT NOT NULL,
            PRIMARY KEY (group_id, position)
        )
        "#
    );

    sqlx::query(&sql).execute(pool).await?;

    Ok(())
}
