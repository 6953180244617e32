//! `OpenAPI` specification generation for the movie catalog API.

use std::sync::OnceLock;

use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use utoipa::OpenApi;

use crate::error::ApiError;

/// `OpenAPI` documentation for the movie catalog API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Marquee Movie Catalog API",
        description = "CRUD, rating, and query surface over the in-memory movie catalog."
    ),
    paths(
        crate::openapi::get_openapi_json,
        crate::routes::movies::create_movie,
        crate::routes::movies::get_movie,
        crate::routes::movies::update_movie,
        crate::routes::movies::delete_movie,
        crate::routes::movies::rate_movie,
        crate::routes::movies::get_rating_summary,
        crate::routes::queries::top_rated,
        crate::routes::queries::by_genre,
        crate::routes::queries::by_director,
        crate::routes::queries::search,
    ),
    components(
        schemas(
            marquee_core::Movie,
            marquee_core::ValidationIssue,
            crate::error::ApiErrorBody,
            crate::routes::movies::CreateMovieRequest,
            crate::routes::movies::UpdateMovieRequest,
            crate::routes::movies::RateMovieRequest,
            crate::routes::movies::MovieResponse,
            crate::routes::movies::MessageResponse,
            crate::routes::movies::RatingSummary,
            crate::routes::queries::RatedMovie,
        )
    ),
    tags(
        (name = "OpenAPI", description = "OpenAPI specification endpoint"),
        (name = "Movies", description = "Movie CRUD operations"),
        (name = "Ratings", description = "Rating submission and aggregation"),
        (name = "Queries", description = "List, filter, and search queries"),
    ),
)]
pub struct MovieApiDoc;

/// Returns the generated `OpenAPI` spec.
#[must_use]
pub fn openapi() -> utoipa::openapi::OpenApi {
    MovieApiDoc::openapi()
}

static OPENAPI_JSON_CACHE: OnceLock<String> = OnceLock::new();

/// Returns the generated `OpenAPI` spec serialized as pretty JSON.
///
/// # Errors
///
/// Returns an error if JSON serialization fails (should not happen).
pub fn openapi_json() -> Result<String, serde_json::Error> {
    if let Some(spec) = OPENAPI_JSON_CACHE.get() {
        return Ok(spec.clone());
    }

    let spec = serde_json::to_string_pretty(&openapi())?;
    let _ = OPENAPI_JSON_CACHE.set(spec.clone());
    Ok(spec)
}

/// Returns the `OpenAPI` spec as JSON.
#[utoipa::path(
    get,
    path = "/openapi.json",
    tag = "OpenAPI",
    responses(
        (
            status = 200,
            description = "OpenAPI specification for the movie catalog API",
            body = String,
            content_type = "application/json"
        ),
        (status = 500, description = "Internal error", body = crate::error::ApiErrorBody),
    )
)]
pub async fn get_openapi_json() -> Response {
    match openapi_json() {
        Ok(spec) => (StatusCode::OK, [(CONTENT_TYPE, "application/json")], spec).into_response(),
        Err(err) => {
            ApiError::internal(format!("failed to serialize OpenAPI spec: {err}")).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_openapi_generation() {
        let spec = openapi();
        assert_eq!(spec.info.title, "Marquee Movie Catalog API");
        // The info version is inherited from the crate version.
        assert_eq!(spec.info.version, env!("CARGO_PKG_VERSION"));
        assert!(spec.paths.paths.contains_key("/openapi.json"));
    }

    #[test]
    fn test_openapi_includes_whole_movie_surface() {
        let spec = serde_json::to_value(openapi()).expect("serialize openapi");
        let paths = spec
            .get("paths")
            .and_then(Value::as_object)
            .expect("paths object");

        for path in [
            "/movies",
            "/movies/{id}",
            "/movies/{id}/rating",
            "/movies/top-rated",
            "/movies/genre/{genre}",
            "/movies/director/{director}",
            "/movies/search",
        ] {
            assert!(paths.contains_key(path), "missing path {path}");
        }
    }
}
