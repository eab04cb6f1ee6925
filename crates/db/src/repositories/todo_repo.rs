//! Repository for the `todos` table.

use chrono::Utc;
use lean_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::todo::{CreateTodo, Todo, TodoToggle, UpdateTodo};

/// Column list for todos queries.
const COLUMNS: &str = "id, title, description, done, created_at";

/// Provides CRUD operations for todo items.
pub struct TodoRepo;

impl TodoRepo {
    /// Insert a new todo, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreateTodo) -> Result<Todo, sqlx::Error> {
        let query = format!(
            "INSERT INTO todos (title, description, done, created_at)
             VALUES (?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(&input.title)
            .bind(input.description.as_deref().unwrap_or_default())
            .bind(input.done)
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    /// Find a todo by ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todos WHERE id = ?");
        sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all todos, most recently created first.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Todo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todos ORDER BY id DESC");
        sqlx::query_as::<_, Todo>(&query).fetch_all(pool).await
    }

    /// Apply a partial update. Fields that are `None` keep their value.
    ///
    /// Returns `None` if the todo does not exist.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateTodo,
    ) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!(
            "UPDATE todos SET
                title = COALESCE(?, title),
                description = COALESCE(?, description),
                done = COALESCE(?, done)
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.done)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Flip the `done` flag in a single statement.
    ///
    /// Returns `None` if the todo does not exist.
    pub async fn toggle(pool: &SqlitePool, id: DbId) -> Result<Option<TodoToggle>, sqlx::Error> {
        sqlx::query_as::<_, TodoToggle>(
            "UPDATE todos SET done = NOT done WHERE id = ? RETURNING id, done",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Delete a todo. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete every completed todo. Returns the number of rows removed.
    pub async fn delete_done(pool: &SqlitePool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM todos WHERE done = 1")
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
