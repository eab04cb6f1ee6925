//! Handlers for the todo API.
//!
//! Every `{id}` handler is also mounted on a `?id=` alias route; the
//! [`RecordId`] extractor reads whichever form the request used.

use axum::extract::State;
use axum::Json;
use lean_core::todo::{validate_title, ENTITY};
use lean_db::models::todo::{CreateTodo, Todo, TodoToggle, UpdateTodo};
use lean_db::repositories::TodoRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, RecordId};
use crate::response::{DeletedCount, DeletedId, Envelope};
use crate::state::AppState;

/// GET /api/todos
pub async fn list_todos(State(state): State<AppState>) -> AppResult<Json<Envelope<Vec<Todo>>>> {
    let todos = TodoRepo::list(&state.pool).await?;
    Ok(Json(Envelope::success(todos)))
}

/// GET /api/todos/{id}
pub async fn get_todo(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> AppResult<Json<Envelope<Todo>>> {
    let todo = TodoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(ENTITY, id))?;
    Ok(Json(Envelope::success(todo)))
}

/// POST /api/todos
pub async fn create_todo(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateTodo>,
) -> AppResult<Json<Envelope<Todo>>> {
    validate_title(&input.title)?;

    let todo = TodoRepo::create(&state.pool, &input).await?;

    tracing::info!(todo_id = todo.id, "Todo created");

    Ok(Json(Envelope::with_message(todo, "Todo created successfully")))
}

/// PUT /api/todos/{id}
///
/// Partial update: only fields present in the body change.
pub async fn update_todo(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    JsonBody(input): JsonBody<UpdateTodo>,
) -> AppResult<Json<Envelope<Todo>>> {
    if let Some(ref title) = input.title {
        validate_title(title)?;
    }

    let todo = TodoRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found(ENTITY, id))?;

    tracing::info!(todo_id = id, "Todo updated");

    Ok(Json(Envelope::with_message(todo, "Todo updated successfully")))
}

/// DELETE /api/todos/{id}
pub async fn delete_todo(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> AppResult<Json<Envelope<DeletedId>>> {
    if !TodoRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found(ENTITY, id));
    }

    tracing::info!(todo_id = id, "Todo deleted");

    Ok(Json(Envelope::with_message(
        DeletedId { id },
        "Todo deleted successfully",
    )))
}

/// DELETE /api/todos
///
/// Clear every completed todo.
pub async fn delete_done_todos(
    State(state): State<AppState>,
) -> AppResult<Json<Envelope<DeletedCount>>> {
    let deleted = TodoRepo::delete_done(&state.pool).await?;

    tracing::info!(deleted, "Completed todos cleared");

    Ok(Json(Envelope::with_message(
        DeletedCount { deleted },
        "Done todos deleted",
    )))
}

/// POST /api/todos/{id}/toggle
pub async fn toggle_todo(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> AppResult<Json<Envelope<TodoToggle>>> {
    let toggled = TodoRepo::toggle(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(ENTITY, id))?;

    tracing::info!(todo_id = id, done = toggled.done, "Todo toggled");

    Ok(Json(Envelope::with_message(toggled, "Todo toggled")))
}
