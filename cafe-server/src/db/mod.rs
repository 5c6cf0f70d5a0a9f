//! Database Module
//!
//! Owns the SQLite connection pool and creates the `cafe` table on startup.

pub mod repository;

use std::path::Path;
use std::time::Duration;

use repository::{RepoError, RepoResult};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};

const SCHEMA: &str = include_str!("schema.sql");

/// Database service - owns a SQLite connection pool
#[derive(Debug, Clone)]
pub struct DbService {
    pub pool: SqlitePool,
}

impl DbService {
    /// Open (or create) the database file and ensure the schema exists
    pub async fn new(db_path: &Path) -> RepoResult<Self> {
        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                RepoError::Database(format!("Failed to create {}: {e}", parent.display()))
            })?;
        }

        // WAL + full sync: a committed write survives power loss
        let options = SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Full)
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .map_err(|e| RepoError::Database(format!("Failed to open database: {e}")))?;

        tracing::info!(path = %db_path.display(), "Database connection established (SQLite WAL)");

        Self::with_pool(pool).await
    }

    /// Private in-memory database (tests and throwaway runs)
    pub async fn in_memory() -> RepoResult<Self> {
        // One connection that never expires: every in-memory connection is its own database
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;

        Self::with_pool(pool).await
    }

    async fn with_pool(pool: SqlitePool) -> RepoResult<Self> {
        sqlx::query(SCHEMA).execute(&pool).await?;
        tracing::debug!("Database schema ready");
        Ok(Self { pool })
    }
}
