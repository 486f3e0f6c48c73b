//! Handler for slug redirects.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::{debug, warn};
use url::form_urlencoded;

use crate::application::services::{Miss, Resolution};
use crate::state::AppState;

/// Redirects a slug to its target URL.
///
/// # Endpoint
///
/// `GET /{slug}`
///
/// # Response
///
/// Always `302 Found`:
///
/// - known slug: `Location: <target>`
/// - unknown slug: `Location: /?error=<slug>+not+found`
/// - failed lookup: `Location: /?error=Link+not+found`
///
/// Misses never produce a 404; the home page shows the `error` parameter.
pub async fn redirect_handler(Path(slug): Path<String>, State(state): State<AppState>) -> Response {
    redirect_slug(&state, slug).await
}

/// Slug whose path collides with the create endpoint.
pub const CREATE_PATH_SLUG: &str = "url";

/// Redirects the mapping whose slug is `url`.
///
/// # Endpoint
///
/// `GET /url`
///
/// The literal `/url` route takes precedence over `/{slug}`, so `GET` on it is
/// answered here exactly like any other slug.
pub async fn create_path_redirect_handler(State(state): State<AppState>) -> Response {
    redirect_slug(&state, CREATE_PATH_SLUG.to_string()).await
}

async fn redirect_slug(state: &AppState, slug: String) -> Response {
    match state.shortener.resolve_slug(&slug).await {
        Resolution::Redirect(target) => match HeaderValue::from_str(&target) {
            Ok(location) => found(location),
            Err(e) => {
                warn!("Stored target for '{}' is not a valid header value: {}", slug, e);
                redirect_home(&Miss::LookupFailed(slug).message())
            }
        },
        Resolution::NotFound(miss) => {
            debug!("Slug '{}' not resolved", miss.slug());
            redirect_home(&miss.message())
        }
    }
}

/// Home page location carrying an `error` query parameter.
pub fn home_with_error(message: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("error", message)
        .finish();

    format!("/?{}", query)
}

fn redirect_home(message: &str) -> Response {
    // Form-urlencoded output is plain ASCII, so this always succeeds.
    match HeaderValue::from_str(&home_with_error(message)) {
        Ok(location) => found(location),
        Err(_) => found(HeaderValue::from_static("/")),
    }
}

fn found(location: HeaderValue) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}
