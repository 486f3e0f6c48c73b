#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use std::sync::Arc;
use slug_shortener::application::services::ShortenerService;
use slug_shortener::domain::entities::{NewUrlMapping, UrlMapping};
use slug_shortener::domain::repositories::{MappingStore, StoreError};
use slug_shortener::infrastructure::memory::InMemoryMappingStore;
use slug_shortener::routes::app_router;
use slug_shortener::state::AppState;

/// Static directory shipped with the crate.
pub const STATIC_DIR: &str = "public";

/// Store whose every call fails, for exercising error paths.
pub struct FailingStore;

#[async_trait]
impl MappingStore for FailingStore {
    async fn insert(&self, _new_mapping: NewUrlMapping) -> Result<UrlMapping, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolClosed))
    }

    async fn find_by_slug(&self, _slug: &str) -> Result<Option<UrlMapping>, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolClosed))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolClosed))
    }
}

pub fn create_test_state(
    store: Arc<dyn MappingStore>,
    expose_error_traces: bool,
) -> AppState {
    AppState::new(Arc::new(ShortenerService::new(store)), expose_error_traces)
}

/// Test server over the full router, backed by a fresh in-memory store.
pub fn memory_server() -> (TestServer, Arc<InMemoryMappingStore>) {
    let store = Arc::new(InMemoryMappingStore::new());
    let state = create_test_state(store.clone(), true);
    let server = TestServer::new(app_router(state, STATIC_DIR)).unwrap();

    (server, store)
}

/// Test server over the full router with a store that always fails.
pub fn failing_server(expose_error_traces: bool) -> TestServer {
    let state = create_test_state(Arc::new(FailingStore), expose_error_traces);
    TestServer::new(app_router(state, STATIC_DIR)).unwrap()
}
