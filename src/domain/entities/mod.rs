//! Core domain entities.
//!
//! The service has a single entity: [`UrlMapping`], with [`NewUrlMapping`]
//! as its insert payload.

pub mod url_mapping;

pub use url_mapping::{NewUrlMapping, UrlMapping};
