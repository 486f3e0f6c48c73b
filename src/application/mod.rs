//! Application layer services implementing business logic.
//!
//! Services consume store traits and provide a clean API for HTTP handlers
//! and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::shortener_service::ShortenerService`] - Mapping creation and slug resolution

pub mod services;
