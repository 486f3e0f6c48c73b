//! API route configuration.

use crate::api::handlers::{create_path_redirect_handler, create_url_handler, redirect_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Mapping routes. All public.
///
/// # Endpoints
///
/// - `POST /url`     - Create a mapping
/// - `GET  /url`     - Redirect the mapping whose slug is `url`
/// - `GET  /{slug}`  - Redirect to the mapped URL
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/url",
            get(create_path_redirect_handler).post(create_url_handler),
        )
        .route("/{slug}", get(redirect_handler))
}
