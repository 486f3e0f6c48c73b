//! HTTP API layer.
//!
//! Translates HTTP requests into service calls and formats the responses.
//!
//! # Modules
//!
//! - [`dto`] - Request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Error trace exposure, security headers, tracing
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
