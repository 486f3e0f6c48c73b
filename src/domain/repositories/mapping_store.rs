//! Store trait for slug-to-URL mappings.

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use async_trait::async_trait;

/// Errors raised by a [`MappingStore`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The slug already belongs to another mapping.
    #[error("Slug '{slug}' is already taken")]
    SlugTaken { slug: String },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Persistent collection of URL mappings keyed by slug.
///
/// Implementations must enforce slug uniqueness atomically at insert time:
/// the service never checks for an existing slug before inserting, so two
/// concurrent inserts of the same slug must leave exactly one record.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMappingStore`] - PostgreSQL implementation
/// - [`crate::infrastructure::memory::InMemoryMappingStore`] - concurrent map, used in tests
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingStore: Send + Sync {
    /// Inserts a new mapping.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::SlugTaken`] if a mapping with the same slug exists;
    /// no record is created in that case.
    ///
    /// Returns [`StoreError::Database`] on any other storage failure.
    async fn insert(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, StoreError>;

    /// Finds a mapping by exact slug match.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlMapping))` if found
    /// - `Ok(None)` if not found
    async fn find_by_slug(&self, slug: &str) -> Result<Option<UrlMapping>, StoreError>;

    /// Checks that the store is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}
