//! PostgreSQL store implementation.
//!
//! Schema lives in `migrations/` and is applied at startup.

pub mod pg_mapping_store;

pub use pg_mapping_store::PgMappingStore;
