//! PostgreSQL implementation of the mapping store.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::{MappingStore, StoreError};
use crate::utils::db_error::is_unique_violation_on_slug;

/// PostgreSQL store for URL mappings.
///
/// Slug uniqueness is enforced by the `url_mappings_slug_key` constraint, so
/// concurrent inserts of the same slug resolve inside the database.
pub struct PgMappingStore {
    pool: Arc<PgPool>,
}

impl PgMappingStore {
    /// Creates a new store with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MappingStore for PgMappingStore {
    async fn insert(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, StoreError> {
        sqlx::query_as::<_, UrlMapping>(
            r#"
            INSERT INTO url_mappings (slug, target)
            VALUES ($1, $2)
            RETURNING slug, target, created_at
            "#,
        )
        .bind(&new_mapping.slug)
        .bind(&new_mapping.target)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            if is_unique_violation_on_slug(&e) {
                StoreError::SlugTaken {
                    slug: new_mapping.slug.clone(),
                }
            } else {
                StoreError::Database(e)
            }
        })
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<UrlMapping>, StoreError> {
        let mapping = sqlx::query_as::<_, UrlMapping>(
            r#"
            SELECT slug, target, created_at
            FROM url_mappings
            WHERE slug = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(mapping)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
