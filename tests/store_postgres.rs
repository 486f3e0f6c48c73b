//! PostgreSQL store tests. Require a database reachable through `DATABASE_URL`:
//!
//! ```bash
//! DATABASE_URL=postgres://... cargo test --test store_postgres -- --ignored
//! ```

use sqlx::PgPool;
use std::sync::Arc;
use slug_shortener::domain::entities::NewUrlMapping;
use slug_shortener::domain::repositories::{MappingStore, StoreError};
use slug_shortener::infrastructure::persistence::PgMappingStore;

fn new_mapping(slug: &str, target: &str) -> NewUrlMapping {
    NewUrlMapping {
        slug: slug.to_string(),
        target: target.to_string(),
    }
}

#[sqlx::test]
#[ignore = "requires PostgreSQL via DATABASE_URL"]
async fn test_insert_mapping(pool: PgPool) {
    let store = PgMappingStore::new(Arc::new(pool));

    let result = store.insert(new_mapping("ex1", "https://example.com")).await;

    assert!(result.is_ok());
    let mapping = result.unwrap();
    assert_eq!(mapping.slug, "ex1");
    assert_eq!(mapping.target, "https://example.com");
}

#[sqlx::test]
#[ignore = "requires PostgreSQL via DATABASE_URL"]
async fn test_find_by_slug(pool: PgPool) {
    sqlx::query("INSERT INTO url_mappings (slug, target) VALUES ($1, $2)")
        .bind("abc123")
        .bind("https://example.com")
        .execute(&pool)
        .await
        .unwrap();

    let store = PgMappingStore::new(Arc::new(pool));
    let mapping = store.find_by_slug("abc123").await.unwrap();

    assert_eq!(mapping.unwrap().target, "https://example.com");
}

#[sqlx::test]
#[ignore = "requires PostgreSQL via DATABASE_URL"]
async fn test_find_by_slug_not_found(pool: PgPool) {
    let store = PgMappingStore::new(Arc::new(pool));

    let result = store.find_by_slug("notfound").await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires PostgreSQL via DATABASE_URL"]
async fn test_duplicate_slug_is_rejected(pool: PgPool) {
    let store = PgMappingStore::new(Arc::new(pool.clone()));

    store
        .insert(new_mapping("dup", "https://first.example"))
        .await
        .unwrap();
    let result = store.insert(new_mapping("dup", "https://second.example")).await;

    assert!(matches!(result, Err(StoreError::SlugTaken { ref slug }) if slug == "dup"));

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM url_mappings WHERE slug = 'dup'")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test]
#[ignore = "requires PostgreSQL via DATABASE_URL"]
async fn test_ping(pool: PgPool) {
    let store = PgMappingStore::new(Arc::new(pool));

    assert!(store.ping().await.is_ok());
}
