//! In-process store implementation.

pub mod in_memory_mapping_store;

pub use in_memory_mapping_store::InMemoryMappingStore;
