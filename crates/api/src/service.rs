//! The two deployable services sharing this crate.

use axum::Router;
use lean_db::Schema;

use crate::routes;
use crate::state::AppState;

/// Which API a binary serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    /// Article CRUD, search, categories and stats.
    Blog,
    /// Todo CRUD with toggle and bulk clear.
    Todo,
}

impl Service {
    pub fn name(self) -> &'static str {
        match self {
            Service::Blog => "blog-api",
            Service::Todo => "todo-api",
        }
    }

    /// Database used when `DATABASE_URL` is unset.
    pub fn default_database_url(self) -> &'static str {
        match self {
            Service::Blog => "sqlite://blog.db",
            Service::Todo => "sqlite://todos.db",
        }
    }

    /// Migration set for this service's database.
    pub fn schema(self) -> Schema {
        match self {
            Service::Blog => Schema::Blog,
            Service::Todo => Schema::Todo,
        }
    }

    /// Routes mounted under `/api`.
    pub fn api_routes(self) -> Router<AppState> {
        match self {
            Service::Blog => routes::blog_routes(),
            Service::Todo => routes::todo_routes(),
        }
    }

    /// `(method, path, description)` rows logged at startup.
    pub fn route_table(self) -> &'static [(&'static str, &'static str, &'static str)] {
        match self {
            Service::Blog => &[
                ("GET", "/api/articles", "List articles (page, limit)"),
                ("GET", "/api/articles/{id}", "Get article by ID"),
                ("POST", "/api/articles", "Create article"),
                ("PUT", "/api/articles/{id}", "Update article"),
                ("DELETE", "/api/articles/{id}", "Delete article"),
                ("GET", "/api/search?q=keyword", "Search articles"),
                ("GET", "/api/category/{name}", "Get articles by category"),
                ("GET", "/api/stats", "Get statistics"),
            ],
            Service::Todo => &[
                ("GET", "/api/todos", "Get all todos"),
                ("POST", "/api/todos", "Create todo"),
                ("DELETE", "/api/todos", "Delete all done todos"),
                ("GET", "/api/todos/{id}", "Get todo by ID"),
                ("PUT", "/api/todos/{id}", "Update todo"),
                ("DELETE", "/api/todos/{id}", "Delete todo"),
                ("POST", "/api/todos/{id}/toggle", "Toggle todo status"),
            ],
        }
    }
}
