//! Domain layer containing the data model and store contract.
//!
//! - [`entities`] - The URL mapping entity
//! - [`validation`] - Declarative schema for creation input
//! - [`repositories`] - Store trait implemented by the infrastructure layer
//!
//! The domain layer has no dependency on the HTTP layer.

pub mod entities;
pub mod repositories;
pub mod validation;
