//! SQLite persistence for notes: pool creation, schema bootstrap, row
//! models, and the repository layer.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::SqlitePool;

/// How long a connection waits on a locked database before `SQLITE_BUSY`.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Schema for the single `notes` table. Safe to run on every start.
const SCHEMA: &str = "\
    CREATE TABLE IF NOT EXISTS notes ( \
        id          TEXT PRIMARY KEY, \
        title       TEXT NOT NULL, \
        description TEXT NOT NULL, \
        category    TEXT NOT NULL DEFAULT 'Others', \
        created_at  TEXT NOT NULL, \
        updated_at  TEXT NOT NULL \
    )";

/// Create a connection pool from a database URL.
///
/// The database file is created if it does not exist. File-backed databases
/// run in WAL mode so readers do not block the single writer.
///
/// Connections are never recycled for idleness or age: an in-memory database
/// (`sqlite::memory:`) lives only as long as its connection.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(BUSY_TIMEOUT);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
}

/// Verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Create the `notes` table if it is absent.
pub async fn ensure_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(SCHEMA).execute(pool).await?;
    tracing::debug!("notes table ready");
    Ok(())
}
