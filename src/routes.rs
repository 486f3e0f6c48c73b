//! Top-level router combining static assets, API routes and middleware.
//!
//! # Route Structure
//!
//! - `GET  /`, `/app.js`, ... - Front-end files from the static directory
//! - `POST /url`              - Create a mapping
//! - `GET  /{slug}`           - Redirect
//!
//! Static files win: a request is only routed to the API when no file in the
//! static directory matches it.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Permissive, the API is meant to be called from anywhere
//! - **Security headers** - See [`security_headers`]
//! - **Error traces** - See [`error_trace`]

use crate::api;
use crate::api::middleware::{error_trace, security_headers, tracing};
use crate::state::AppState;
use axum::{Router, middleware};
use std::path::Path;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

/// Constructs the application router.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `static_dir` - directory holding the browser front-end
pub fn app_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    let api_router = api::routes::public_routes()
        .layer(middleware::from_fn_with_state(
            state.clone(),
            error_trace::layer,
        ))
        .with_state(state);

    let assets = ServeDir::new(static_dir)
        .call_fallback_on_method_not_allowed(true)
        .fallback(api_router);

    let router = Router::new().fallback_service(assets);

    security_headers::apply(router)
        .layer(CorsLayer::permissive())
        .layer(tracing::layer())
}
