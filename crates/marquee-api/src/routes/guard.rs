//! Movie existence guard for id-scoped routes.

use axum::extract::{Path, Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::error::ApiError;
use crate::state::AppState;

/// Short-circuits id-scoped routes with 404 when the movie is absent.
///
/// Applied via `route_layer` to every route parameterized by `:id`; the
/// route body never runs for an unknown id, so a 404 always wins over a
/// 400 for an invalid body on the same request.
pub async fn require_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
    req: Request,
    next: Next,
) -> Response {
    match state.catalog.contains(&id) {
        Ok(true) => next.run(req).await,
        Ok(false) => {
            tracing::debug!(id = %id, "id-scoped request for unknown movie");
            ApiError::not_found("Movie not found").into_response()
        }
        Err(err) => ApiError::from(err).into_response(),
    }
}
