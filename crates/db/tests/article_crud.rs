//! Integration tests for the article repository.

mod common;

use lean_core::pagination::Page;
use lean_db::models::article::{CreateArticle, UpdateArticle};
use lean_db::repositories::ArticleRepo;
use lean_db::Schema;
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_article(title: &str, category: Option<&str>) -> CreateArticle {
    CreateArticle {
        title: title.to_string(),
        content: format!("Body of {title}"),
        author: "alice".to_string(),
        category: category.map(str::to_string),
    }
}

async fn seed(pool: &SqlitePool, titles: &[&str]) -> Vec<i64> {
    let mut ids = Vec::new();
    for t in titles {
        ids.push(ArticleRepo::create(pool, &new_article(t, None)).await.unwrap().id);
    }
    ids
}

// ---------------------------------------------------------------------------
// Create / read
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_then_find_returns_same_fields() {
    let pool = common::test_pool(Schema::Blog).await;
    let created = ArticleRepo::create(&pool, &new_article("Hello", Some("rust")))
        .await
        .unwrap();

    assert!(created.id > 0);
    assert_eq!(created.view_count, 0);
    assert_eq!(created.created_at, created.updated_at);

    let found = ArticleRepo::find_by_id(&pool, created.id).await.unwrap().unwrap();
    assert_eq!(found.title, "Hello");
    assert_eq!(found.content, "Body of Hello");
    assert_eq!(found.author, "alice");
    assert_eq!(found.category, "rust");
}

#[tokio::test]
async fn missing_category_stored_as_empty() {
    let pool = common::test_pool(Schema::Blog).await;
    let created = ArticleRepo::create(&pool, &new_article("No cat", None)).await.unwrap();
    assert_eq!(created.category, "");
}

#[tokio::test]
async fn find_missing_returns_none() {
    let pool = common::test_pool(Schema::Blog).await;
    assert!(ArticleRepo::find_by_id(&pool, 999).await.unwrap().is_none());
}

#[tokio::test]
async fn record_view_increments_by_one_each_time() {
    let pool = common::test_pool(Schema::Blog).await;
    let id = seed(&pool, &["Viewed"]).await[0];

    let first = ArticleRepo::record_view(&pool, id).await.unwrap().unwrap();
    assert_eq!(first.view_count, 1);
    let second = ArticleRepo::record_view(&pool, id).await.unwrap().unwrap();
    assert_eq!(second.view_count, 2);

    assert!(ArticleRepo::record_view(&pool, id + 100).await.unwrap().is_none());
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_is_newest_first_and_paginated() {
    let pool = common::test_pool(Schema::Blog).await;
    seed(&pool, &["a", "b", "c"]).await;

    let first = ArticleRepo::list(&pool, Page { page: 1, limit: 2 }).await.unwrap();
    let titles: Vec<_> = first.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, ["c", "b"]);

    let second = ArticleRepo::list(&pool, Page { page: 2, limit: 2 }).await.unwrap();
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].title, "a");

    assert_eq!(ArticleRepo::count(&pool).await.unwrap(), 3);
}

#[tokio::test]
async fn list_by_unknown_category_is_empty() {
    let pool = common::test_pool(Schema::Blog).await;
    ArticleRepo::create(&pool, &new_article("in go", Some("go"))).await.unwrap();
    ArticleRepo::create(&pool, &new_article("in rust", Some("rust"))).await.unwrap();

    let go = ArticleRepo::list_by_category(&pool, "go").await.unwrap();
    assert_eq!(go.len(), 1);
    assert_eq!(go[0].title, "in go");

    assert!(ArticleRepo::list_by_category(&pool, "haskell").await.unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Update / delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_changes_only_given_fields() {
    let pool = common::test_pool(Schema::Blog).await;
    let id = seed(&pool, &["Original"]).await[0];

    let updated = ArticleRepo::update(
        &pool,
        id,
        &UpdateArticle {
            title: Some("Renamed".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.content, "Body of Original");
    assert_eq!(updated.author, "alice");
    assert!(updated.updated_at >= updated.created_at);
}

#[tokio::test]
async fn update_missing_returns_none() {
    let pool = common::test_pool(Schema::Blog).await;
    let result = ArticleRepo::update(&pool, 42, &UpdateArticle::default()).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn delete_removes_row() {
    let pool = common::test_pool(Schema::Blog).await;
    let id = seed(&pool, &["Doomed"]).await[0];

    assert!(ArticleRepo::delete(&pool, id).await.unwrap());
    assert!(ArticleRepo::find_by_id(&pool, id).await.unwrap().is_none());
    assert!(!ArticleRepo::delete(&pool, id).await.unwrap());
}

// ---------------------------------------------------------------------------
// Search / stats
// ---------------------------------------------------------------------------

#[tokio::test]
async fn search_matches_title_content_and_author_ignoring_ascii_case() {
    let pool = common::test_pool(Schema::Blog).await;
    ArticleRepo::create(&pool, &new_article("Learning Rust", None)).await.unwrap();
    ArticleRepo::create(
        &pool,
        &CreateArticle {
            title: "Misc".into(),
            content: "nothing here".into(),
            author: "Rusty".into(),
            category: None,
        },
    )
    .await
    .unwrap();
    ArticleRepo::create(&pool, &new_article("Unrelated", None)).await.unwrap();

    let hits = ArticleRepo::search(&pool, "rust").await.unwrap();
    assert_eq!(hits.len(), 2);

    assert!(ArticleRepo::search(&pool, "zzz").await.unwrap().is_empty());
}

#[tokio::test]
async fn search_case_folding_is_ascii_only() {
    let pool = common::test_pool(Schema::Blog).await;
    ArticleRepo::create(&pool, &new_article("Äpfel", None)).await.unwrap();

    assert_eq!(ArticleRepo::search(&pool, "Äpfel").await.unwrap().len(), 1);
    assert!(ArticleRepo::search(&pool, "äpfel").await.unwrap().is_empty());
    // The ASCII tail still folds.
    assert_eq!(ArticleRepo::search(&pool, "PFEL").await.unwrap().len(), 1);
}

#[tokio::test]
async fn search_treats_wildcards_literally() {
    let pool = common::test_pool(Schema::Blog).await;
    seed(&pool, &["plain title"]).await;
    ArticleRepo::create(&pool, &new_article("100% done", None)).await.unwrap();

    let hits = ArticleRepo::search(&pool, "%").await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "100% done");
}

#[tokio::test]
async fn stats_on_empty_table_are_zero() {
    let pool = common::test_pool(Schema::Blog).await;
    let stats = ArticleRepo::stats(&pool).await.unwrap();
    assert_eq!(stats.total_articles, 0);
    assert_eq!(stats.total_views, 0);
}

#[tokio::test]
async fn stats_sum_views() {
    let pool = common::test_pool(Schema::Blog).await;
    let ids = seed(&pool, &["x", "y"]).await;
    ArticleRepo::record_view(&pool, ids[0]).await.unwrap();
    ArticleRepo::record_view(&pool, ids[0]).await.unwrap();
    ArticleRepo::record_view(&pool, ids[1]).await.unwrap();

    let stats = ArticleRepo::stats(&pool).await.unwrap();
    assert_eq!(stats.total_articles, 2);
    assert_eq!(stats.total_views, 3);
}
