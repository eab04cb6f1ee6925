//! Todo item models.

use lean_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `todos` table.
///
/// `description` is serialized as `desc`, the key existing clients read.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Todo {
    pub id: DbId,
    pub title: String,
    #[serde(rename = "desc")]
    pub description: String,
    pub done: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a new todo. Both `desc` and `description` are accepted.
#[derive(Debug, Deserialize)]
pub struct CreateTodo {
    #[serde(default)]
    pub title: String,
    #[serde(default, alias = "desc")]
    pub description: Option<String>,
    #[serde(default)]
    pub done: bool,
}

/// DTO for updating an existing todo. Absent fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTodo {
    pub title: Option<String>,
    #[serde(alias = "desc")]
    pub description: Option<String>,
    pub done: Option<bool>,
}

/// Result of flipping a todo's `done` flag.
#[derive(Debug, Clone, Copy, FromRow, Serialize)]
pub struct TodoToggle {
    pub id: DbId,
    pub done: bool,
}
