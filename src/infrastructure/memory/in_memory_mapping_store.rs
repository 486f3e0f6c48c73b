//! In-memory implementation of the mapping store.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::{MappingStore, StoreError};

/// Mapping store backed by a [`DashMap`].
///
/// Check-and-insert goes through the map's entry API, which holds the shard
/// lock for the slug, so the uniqueness guarantee matches the database
/// constraint. Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryMappingStore {
    mappings: DashMap<String, UrlMapping>,
}

impl InMemoryMappingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored mappings.
    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}

#[async_trait]
impl MappingStore for InMemoryMappingStore {
    async fn insert(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, StoreError> {
        match self.mappings.entry(new_mapping.slug) {
            Entry::Occupied(occupied) => Err(StoreError::SlugTaken {
                slug: occupied.key().clone(),
            }),
            Entry::Vacant(vacant) => {
                let mapping = UrlMapping::new(vacant.key().clone(), new_mapping.target, Utc::now());
                vacant.insert(mapping.clone());
                Ok(mapping)
            }
        }
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<UrlMapping>, StoreError> {
        Ok(self.mappings.get(slug).map(|m| m.value().clone()))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
