//! SQLite persistence for the blog and todo services.
//!
//! Exposes pool construction, a liveness probe, per-service embedded
//! migrations, and the [`models`] / [`repositories`] used by the HTTP layer.

pub mod models;
pub mod repositories;

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};

pub type DbPool = sqlx::SqlitePool;

const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Create a connection pool from a database URL.
///
/// File databases are created if missing and run in WAL mode. An in-memory
/// URL (`sqlite::memory:`) is pinned to a single connection that is never
/// recycled, since every SQLite connection would otherwise see its own
/// empty database.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    let in_memory = database_url.contains(":memory:");

    let mut options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);
    if !in_memory {
        options = options.journal_mode(SqliteJournalMode::Wal);
    }

    let pool_options = if in_memory {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(max_connections.max(1))
    };

    let pool = pool_options
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect_with(options)
        .await?;

    tracing::debug!(database_url, in_memory, "SQLite pool opened");
    Ok(pool)
}

/// Verify that the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Which service's tables a database holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schema {
    /// `articles`, from `migrations/blog`.
    Blog,
    /// `todos`, from `migrations/todo`.
    Todo,
}

/// Apply the embedded migrations for `schema`.
pub async fn run_migrations(pool: &DbPool, schema: Schema) -> Result<(), sqlx::migrate::MigrateError> {
    let migrator = match schema {
        Schema::Blog => sqlx::migrate!("./migrations/blog"),
        Schema::Todo => sqlx::migrate!("./migrations/todo"),
    };
    migrator.run(pool).await
}
