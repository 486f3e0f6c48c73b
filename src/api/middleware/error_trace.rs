//! Error trace exposure middleware.

use axum::{
    Json,
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error::ErrorReport;
use crate::state::AppState;

/// Rewrites formatter responses to include the error trace.
///
/// [`crate::error::AppError`] always renders `"stack": "ok"`. When
/// [`AppState::expose_error_traces`] is set (any environment other than
/// production), responses carrying an [`ErrorReport`] are re-rendered with
/// the full cause chain. Status and headers are kept.
///
/// # Example
///
/// ```rust,ignore
/// let routes = Router::new()
///     .route("/url", post(create_url_handler))
///     .layer(middleware::from_fn_with_state(state.clone(), error_trace::layer));
/// ```
pub async fn layer(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let response = next.run(req).await;

    if !state.expose_error_traces {
        return response;
    }

    let Some(report) = response.extensions().get::<ErrorReport>().cloned() else {
        return response;
    };

    let (mut parts, _) = response.into_parts();
    parts.headers.remove(header::CONTENT_LENGTH);

    let body = Json(report.body(true)).into_response().into_body();
    Response::from_parts(parts, body)
}
