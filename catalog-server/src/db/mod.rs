//! Database bootstrap
//!
//! Opens the SQLite catalog database and applies the embedded migrations.
//! Everything lives in one file-backed database: vehicles, lookup tables,
//! homepage ordering, and image records. Queries run through the
//! repositories in [`repository`] against the pool created here.

pub mod repository;
pub mod seed;

use std::path::Path;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};

use crate::utils::AppError;

/// SQLite allows a single writer at a time, so a small pool is enough;
/// readers share WAL snapshots.
const MAX_CONNECTIONS: u32 = 5;

/// Open the catalog database (creating the file if missing) and bring
/// the schema up to date.
pub async fn connect(db_file: &Path) -> Result<SqlitePool, AppError> {
    let options = SqliteConnectOptions::new()
        .filename(db_file)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        // wait out write contention instead of failing immediately
        .busy_timeout(Duration::from_secs(5))
        .foreign_keys(true)
        .optimize_on_close(true, None);

    let pool = SqlitePoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect_with(options)
        .await
        .map_err(|e| {
            AppError::database(format!("Failed to open {}: {e}", db_file.display()))
        })?;
    tracing::info!(db = %db_file.display(), "SQLite pool ready (WAL)");

    sqlx::migrate!("./migrations")
        .set_ignore_missing(true)
        .run(&pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to apply migrations: {e}")))?;
    tracing::info!("Database schema up to date");

    Ok(pool)
}
