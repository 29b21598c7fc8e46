use std::str::FromStr;

use anyhow::Result;
use chrono::{SecondsFormat, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::info;

use crate::models::generation::GenerationRecord;

const CREATE_GENERATIONS: &str = r#"
    CREATE TABLE IF NOT EXISTS generations (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        timestamp TEXT,
        category TEXT,
        vibe TEXT,
        layout TEXT,
        font TEXT,
        primary_color TEXT
    )
"#;

/// Opens (creating if needed) the SQLite database and ensures the schema exists.
pub async fn create_pool(database_url: &str) -> Result<SqlitePool> {
    info!("Opening SQLite database at {database_url}...");

    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    init_schema(&pool).await?;

    info!("SQLite pool established");
    Ok(pool)
}

pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_GENERATIONS).execute(pool).await?;
    Ok(())
}

/// Appends one row to the generation log. Append-only; rows are never read back by the service.
pub async fn log_generation(pool: &SqlitePool, record: &GenerationRecord<'_>) -> Result<(), sqlx::Error> {
    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    sqlx::query(
        "INSERT INTO generations (timestamp, category, vibe, layout, font, primary_color) \
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(timestamp)
    .bind(record.category)
    .bind(record.vibe)
    .bind(record.layout)
    .bind(record.font)
    .bind(record.primary_color)
    .execute(pool)
    .await?;
    Ok(())
}

/// Single-connection in-memory pool; every connection to `:memory:` is a fresh database.
#[cfg(test)]
pub async fn memory_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    init_schema(&pool).await.unwrap();
    pool
}
