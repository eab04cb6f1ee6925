//! Blog article models.

use lean_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `articles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Article {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub author: String,
    pub category: String,
    pub view_count: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new article.
///
/// Required fields default to empty so a missing key is reported as
/// "`<Field>` is required" by validation rather than as a decode error.
#[derive(Debug, Deserialize)]
pub struct CreateArticle {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: String,
    pub category: Option<String>,
}

/// DTO for updating an existing article. Absent fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateArticle {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
}

/// Aggregate counters over the `articles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ArticleStats {
    pub total_articles: i64,
    pub total_views: i64,
}

/// One page of a paginated article listing.
#[derive(Debug, Serialize)]
pub struct ArticlePage {
    pub articles: Vec<Article>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
}
