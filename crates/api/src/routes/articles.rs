//! Route definitions for blog articles.

use axum::routing::get;
use axum::Router;

use crate::handlers::articles;
use crate::state::AppState;

/// Article CRUD routes, registered as `/articles`.
///
/// ```text
/// GET    /        list_articles
/// POST   /        create_article
/// GET    /{id}    get_article
/// PUT    /{id}    update_article
/// DELETE /{id}    delete_article
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(articles::list_articles).post(articles::create_article),
        )
        .route(
            "/{id}",
            get(articles::get_article)
                .put(articles::update_article)
                .delete(articles::delete_article),
        )
}

/// Search, category and statistics routes, merged at the `/api` root.
///
/// ```text
/// GET    /search            search_articles
/// GET    /category/{name}   list_by_category
/// GET    /stats             stats
/// ```
pub fn discovery_router() -> Router<AppState> {
    Router::new()
        .route("/search", get(articles::search_articles))
        .route("/category/{name}", get(articles::list_by_category))
        .route("/stats", get(articles::stats))
}
