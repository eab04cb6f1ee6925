//! Handlers for the blog article API.

use axum::extract::{Path, Query, State};
use axum::Json;
use lean_core::article::{
    validate_author, validate_category, validate_content, validate_title, ENTITY,
};
use lean_core::pagination::Page;
use lean_core::search::normalize_keyword;
use lean_db::models::article::{Article, ArticlePage, ArticleStats, CreateArticle, UpdateArticle};
use lean_db::repositories::ArticleRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, RecordId};
use crate::query::{PageParams, SearchParams};
use crate::response::{DeletedId, Envelope};
use crate::state::AppState;

/* --------------------------------------------------------------------------
Helpers
-------------------------------------------------------------------------- */

fn validate_create(input: &CreateArticle) -> Result<(), AppError> {
    validate_title(&input.title)?;
    validate_content(&input.content)?;
    validate_author(&input.author)?;
    if let Some(ref category) = input.category {
        validate_category(category)?;
    }
    Ok(())
}

fn validate_update(input: &UpdateArticle) -> Result<(), AppError> {
    if let Some(ref title) = input.title {
        validate_title(title)?;
    }
    if let Some(ref content) = input.content {
        validate_content(content)?;
    }
    if let Some(ref author) = input.author {
        validate_author(author)?;
    }
    if let Some(ref category) = input.category {
        validate_category(category)?;
    }
    Ok(())
}

/* --------------------------------------------------------------------------
Article CRUD
-------------------------------------------------------------------------- */

/// GET /api/articles?page=&limit=
///
/// One page of articles, newest first, with the overall total.
pub async fn list_articles(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<Envelope<ArticlePage>>> {
    let page = Page::from_raw(params.page.as_deref(), params.limit.as_deref());

    let total = ArticleRepo::count(&state.pool).await?;
    let articles = ArticleRepo::list(&state.pool, page).await?;

    Ok(Json(Envelope::success(ArticlePage {
        articles,
        total,
        page: page.page,
        limit: page.limit,
    })))
}

/// GET /api/articles/{id}
///
/// Fetch a single article and count the view.
pub async fn get_article(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> AppResult<Json<Envelope<Article>>> {
    let article = ArticleRepo::record_view(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(ENTITY, id))?;

    Ok(Json(Envelope::success(article)))
}

/// POST /api/articles
pub async fn create_article(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateArticle>,
) -> AppResult<Json<Envelope<Article>>> {
    validate_create(&input)?;

    let article = ArticleRepo::create(&state.pool, &input).await?;

    tracing::info!(article_id = article.id, author = %article.author, "Article created");

    Ok(Json(Envelope::with_message(
        article,
        "Article created successfully",
    )))
}

/// PUT /api/articles/{id}
///
/// Partial update: only fields present in the body change.
pub async fn update_article(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    JsonBody(input): JsonBody<UpdateArticle>,
) -> AppResult<Json<Envelope<Article>>> {
    validate_update(&input)?;

    let article = ArticleRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found(ENTITY, id))?;

    tracing::info!(article_id = id, "Article updated");

    Ok(Json(Envelope::with_message(
        article,
        "Article updated successfully",
    )))
}

/// DELETE /api/articles/{id}
pub async fn delete_article(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> AppResult<Json<Envelope<DeletedId>>> {
    if !ArticleRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found(ENTITY, id));
    }

    tracing::info!(article_id = id, "Article deleted");

    Ok(Json(Envelope::with_message(
        DeletedId { id },
        "Article deleted successfully",
    )))
}

/* --------------------------------------------------------------------------
Discovery
-------------------------------------------------------------------------- */

/// GET /api/search?q=keyword
pub async fn search_articles(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Envelope<Vec<Article>>>> {
    let keyword = normalize_keyword(params.q.as_deref())?;
    let articles = ArticleRepo::search(&state.pool, &keyword).await?;

    tracing::debug!(%keyword, hits = articles.len(), "Article search");

    Ok(Json(Envelope::with_message(articles, "Search completed")))
}

/// GET /api/category/{name}
pub async fn list_by_category(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<Envelope<Vec<Article>>>> {
    let articles = ArticleRepo::list_by_category(&state.pool, &name).await?;
    Ok(Json(Envelope::success(articles)))
}

/// GET /api/stats
pub async fn stats(State(state): State<AppState>) -> AppResult<Json<Envelope<ArticleStats>>> {
    let stats = ArticleRepo::stats(&state.pool).await?;
    Ok(Json(Envelope::success(stats)))
}
