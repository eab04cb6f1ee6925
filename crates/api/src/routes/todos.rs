//! Route definitions for todos.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::todos;
use crate::state::AppState;

/// Todo routes, registered as `/todos`.
///
/// ```text
/// GET    /                  list_todos
/// POST   /                  create_todo
/// DELETE /                  delete_done_todos
/// GET    /{id}              get_todo
/// PUT    /{id}              update_todo
/// DELETE /{id}              delete_todo
/// POST   /{id}/toggle       toggle_todo
/// GET    /detail?id=N       get_todo
/// PUT    /update?id=N       update_todo
/// DELETE /delete?id=N       delete_todo
/// POST   /toggle?id=N       toggle_todo
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(todos::list_todos)
                .post(todos::create_todo)
                .delete(todos::delete_done_todos),
        )
        .route("/detail", get(todos::get_todo))
        .route("/update", put(todos::update_todo))
        .route("/delete", delete(todos::delete_todo))
        .route("/toggle", post(todos::toggle_todo))
        .route(
            "/{id}",
            get(todos::get_todo)
                .put(todos::update_todo)
                .delete(todos::delete_todo),
        )
        .route("/{id}/toggle", post(todos::toggle_todo))
}
