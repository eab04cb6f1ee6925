pub mod articles;
pub mod health;
pub mod todos;

use axum::extract::OriginalUri;
use axum::http::Method;
use axum::Router;

use crate::error::AppError;
use crate::state::AppState;

/// Build the blog service's `/api` route tree.
///
/// ```text
/// /articles                  list, create
/// /articles/{id}             get (counts a view), update, delete
/// /search?q=                 keyword search
/// /category/{name}           list by category
/// /stats                     totals
/// ```
pub fn blog_routes() -> Router<AppState> {
    Router::new()
        .nest("/articles", articles::router())
        .merge(articles::discovery_router())
}

/// Build the todo service's `/api` route tree.
///
/// ```text
/// /todos                     list, create, delete completed
/// /todos/{id}                get, update, delete
/// /todos/{id}/toggle         flip done
/// /todos/{detail|update|delete|toggle}?id=N   query-string aliases
/// ```
pub fn todo_routes() -> Router<AppState> {
    Router::new().nest("/todos", todos::router())
}

/// Fallback for `/api` paths that match no route.
pub async fn api_not_found(OriginalUri(uri): OriginalUri) -> AppError {
    tracing::debug!(path = %uri.path(), "No API route matched");
    AppError::RouteNotFound(uri.path().to_string())
}

/// Fallback for `/api` paths that exist but not for this method.
pub async fn api_method_not_allowed(method: Method, OriginalUri(uri): OriginalUri) -> AppError {
    tracing::debug!(%method, path = %uri.path(), "Method not allowed");
    AppError::MethodNotAllowed(method.to_string())
}
