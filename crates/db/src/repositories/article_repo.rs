//! Repository for the `articles` table.

use chrono::Utc;
use lean_core::pagination::Page;
use lean_core::search::like_pattern;
use lean_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::article::{Article, ArticleStats, CreateArticle, UpdateArticle};

/// Column list for articles queries.
const COLUMNS: &str = "id, title, content, author, category, view_count, created_at, updated_at";

/// Newest first; `id` breaks ties between rows created in the same instant.
const ORDER_NEWEST: &str = "ORDER BY created_at DESC, id DESC";

/// Provides CRUD operations for blog articles.
pub struct ArticleRepo;

impl ArticleRepo {
    /// Insert a new article, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreateArticle) -> Result<Article, sqlx::Error> {
        let now = Utc::now();
        let query = format!(
            "INSERT INTO articles (title, content, author, category, view_count, created_at, updated_at)
             VALUES (?, ?, ?, ?, 0, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.author)
            .bind(input.category.as_deref().unwrap_or_default())
            .bind(now)
            .bind(now)
            .fetch_one(pool)
            .await
    }

    /// Find an article by ID without touching its view counter.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Article>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM articles WHERE id = ?");
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Increment the view counter and return the updated row in one statement.
    ///
    /// Returns `None` if the article does not exist.
    pub async fn record_view(pool: &SqlitePool, id: DbId) -> Result<Option<Article>, sqlx::Error> {
        let query = format!(
            "UPDATE articles SET view_count = view_count + 1
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List one page of articles, newest first.
    pub async fn list(pool: &SqlitePool, page: Page) -> Result<Vec<Article>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM articles {ORDER_NEWEST} LIMIT ? OFFSET ?");
        sqlx::query_as::<_, Article>(&query)
            .bind(page.limit)
            .bind(page.offset())
            .fetch_all(pool)
            .await
    }

    /// Total number of articles.
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM articles")
            .fetch_one(pool)
            .await
    }

    /// Apply a partial update. Fields that are `None` keep their value.
    ///
    /// Returns `None` if the article does not exist.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateArticle,
    ) -> Result<Option<Article>, sqlx::Error> {
        let query = format!(
            "UPDATE articles SET
                title = COALESCE(?, title),
                content = COALESCE(?, content),
                author = COALESCE(?, author),
                category = COALESCE(?, category),
                updated_at = ?
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.author)
            .bind(&input.category)
            .bind(Utc::now())
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete an article. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM articles WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Substring search over title, content and author.
    ///
    /// SQLite `LIKE` folds case for ASCII letters only, so `Rust` finds
    /// `rust` but `Äpfel` does not find `äpfel`.
    pub async fn search(pool: &SqlitePool, keyword: &str) -> Result<Vec<Article>, sqlx::Error> {
        let pattern = like_pattern(keyword);
        let query = format!(
            "SELECT {COLUMNS} FROM articles
             WHERE title LIKE ? ESCAPE '\\'
                OR content LIKE ? ESCAPE '\\'
                OR author LIKE ? ESCAPE '\\'
             {ORDER_NEWEST}"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(&pattern)
            .bind(&pattern)
            .bind(&pattern)
            .fetch_all(pool)
            .await
    }

    /// All articles in one category, newest first.
    pub async fn list_by_category(
        pool: &SqlitePool,
        category: &str,
    ) -> Result<Vec<Article>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM articles WHERE category = ? {ORDER_NEWEST}");
        sqlx::query_as::<_, Article>(&query)
            .bind(category)
            .fetch_all(pool)
            .await
    }

    /// Article count and summed views.
    pub async fn stats(pool: &SqlitePool) -> Result<ArticleStats, sqlx::Error> {
        sqlx::query_as::<_, ArticleStats>(
            "SELECT COUNT(*) AS total_articles,
                    COALESCE(SUM(view_count), 0) AS total_views
             FROM articles",
        )
        .fetch_one(pool)
        .await
    }
}
