use lean_db::Schema;
use sqlx::SqlitePool;

/// Fresh in-memory database with `schema`'s migrations applied.
pub async fn test_pool(schema: Schema) -> SqlitePool {
    let pool = lean_db::create_pool("sqlite::memory:", 1)
        .await
        .expect("in-memory pool");
    lean_db::run_migrations(&pool, schema)
        .await
        .expect("migrations apply cleanly");
    pool
}
