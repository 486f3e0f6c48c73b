//! Handler for the mapping creation endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::info;

use crate::api::dto::shorten::{CreateUrlRequest, MappingResponse, MessageResponse};
use crate::application::services::ShortenError;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a mapping from a URL and an optional slug.
///
/// # Endpoint
///
/// `POST /url`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com", "slug": "ex1" }
/// ```
///
/// # Response
///
/// - `200 OK` with `{ "slug": "ex1", "url": "https://example.com", "created_at": "..." }`
/// - `409 Conflict` with `{ "message": "Slug in use." }` when the slug is taken
///
/// # Errors
///
/// Malformed JSON, validation failures and store failures go through the
/// error formatter (`400`/`415`/`422`, `400`, `500`).
pub async fn create_url_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateUrlRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(payload) = payload?;

    match state
        .shortener
        .create_mapping(payload.slug, payload.url)
        .await
    {
        Ok(mapping) => {
            info!("Created mapping '{}'", mapping.slug);
            Ok(Json(MappingResponse::from(mapping)).into_response())
        }
        Err(ShortenError::SlugInUse { slug }) => {
            info!("Slug '{}' is already in use", slug);
            Ok((StatusCode::CONFLICT, Json(MessageResponse::slug_in_use())).into_response())
        }
        Err(ShortenError::Invalid(errors)) => Err(AppError::Validation(errors)),
        Err(ShortenError::Store(e)) => Err(AppError::Store(e)),
    }
}
