//! Infrastructure layer: concrete [`crate::domain::repositories::MappingStore`]
//! implementations.
//!
//! - [`persistence`] - PostgreSQL store
//! - [`memory`] - in-process store for tests and throwaway deployments

pub mod memory;
pub mod persistence;
