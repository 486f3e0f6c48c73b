//! Centralized error type and JSON error formatter for HTTP handlers.
//!
//! Every [`AppError`] renders as
//!
//! ```json
//! { "message": "url must be a valid URL", "stack": "ok" }
//! ```
//!
//! `stack` is always `"ok"` at this point. The full cause chain travels with
//! the response as an [`ErrorReport`] extension, and
//! [`crate::api::middleware::error_trace`] swaps it into the body outside
//! production.
//!
//! Slug conflicts and unresolved slugs are answered by their handlers
//! directly and never pass through here.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use validator::ValidationErrors;

use crate::domain::repositories::StoreError;

/// Placeholder sent instead of a trace in production.
pub const HIDDEN_TRACE: &str = "ok";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(#[from] ValidationErrors),

    /// The request body was not acceptable JSON.
    #[error("{0}")]
    MalformedBody(#[from] JsonRejection),

    #[error("Database error")]
    Store(#[from] StoreError),
}

impl AppError {
    /// HTTP status carried by the error.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::MalformedBody(rejection) => rejection.status(),
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Debug representation followed by the chain of underlying causes.
    pub fn trace(&self) -> String {
        let mut trace = format!("{:?}", self);
        let mut source = std::error::Error::source(self);

        while let Some(cause) = source {
            trace.push_str("\ncaused by: ");
            trace.push_str(&cause.to_string());
            source = cause.source();
        }

        trace
    }
}

/// JSON body produced by the error formatter.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    pub stack: String,
}

/// Error details attached to error responses as an extension.
#[derive(Debug, Clone)]
pub struct ErrorReport {
    pub message: String,
    pub trace: String,
}

impl ErrorReport {
    /// Builds the response body, with or without the trace.
    pub fn body(&self, expose_trace: bool) -> ErrorBody {
        ErrorBody {
            message: self.message.clone(),
            stack: if expose_trace {
                self.trace.clone()
            } else {
                HIDDEN_TRACE.to_string()
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let report = ErrorReport {
            message: self.to_string(),
            trace: self.trace(),
        };

        let mut response = (self.status(), Json(report.body(false))).into_response();
        response.extensions_mut().insert(report);
        response
    }
}
