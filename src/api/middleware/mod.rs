//! HTTP middleware for request processing.
//!
//! Provides error trace exposure, security headers and observability.

pub mod error_trace;
pub mod security_headers;
pub mod tracing;
