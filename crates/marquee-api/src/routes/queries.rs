//! Derived read queries over the whole catalog.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use marquee_core::Movie;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Movie annotated with its computed average rating.
///
/// Unrated movies carry `0.0`; the value doubles as the sort key for the
/// top-rated listing.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RatedMovie {
    /// The underlying movie record.
    #[serde(flatten)]
    pub movie: Movie,
    /// Average rating, 0.0 when unrated.
    pub average_rating: f64,
}

/// `GET /movies/search` query parameters.
#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchParams {
    /// Case-insensitive substring matched against movie titles.
    pub keyword: Option<String>,
}

/// `GET /movies/top-rated`
#[utoipa::path(
    get,
    path = "/movies/top-rated",
    tag = "Queries",
    responses(
        (status = 200, description = "All movies sorted by average rating, descending", body = [RatedMovie]),
        (status = 404, description = "Empty store", body = crate::error::ApiErrorBody),
    )
)]
pub async fn top_rated(State(state): State<AppState>) -> ApiResult<Json<Vec<RatedMovie>>> {
    let movies = state.catalog.all()?;
    if movies.is_empty() {
        return Err(ApiError::not_found("No movies found"));
    }

    let mut rated: Vec<RatedMovie> = movies
        .into_iter()
        .map(|movie| {
            let average_rating = movie.average_rating().unwrap_or(0.0);
            RatedMovie {
                movie,
                average_rating,
            }
        })
        .collect();
    // Stable sort keeps tie order consistent across repeated calls on an
    // unchanged store.
    rated.sort_by(|a, b| b.average_rating.total_cmp(&a.average_rating));
    Ok(Json(rated))
}

/// `GET /movies/genre/{genre}`
#[utoipa::path(
    get,
    path = "/movies/genre/{genre}",
    tag = "Queries",
    params(
        ("genre" = String, Path, description = "Genre label, matched case-insensitively"),
    ),
    responses(
        (status = 200, description = "Movies in the genre", body = [Movie]),
        (status = 404, description = "No matches", body = crate::error::ApiErrorBody),
    )
)]
pub async fn by_genre(
    State(state): State<AppState>,
    Path(genre): Path<String>,
) -> ApiResult<Json<Vec<Movie>>> {
    let needle = genre.to_lowercase();
    let matches: Vec<Movie> = state
        .catalog
        .all()?
        .into_iter()
        .filter(|movie| movie.genre.to_lowercase() == needle)
        .collect();
    if matches.is_empty() {
        return Err(ApiError::not_found("No movies found for this genre"));
    }
    Ok(Json(matches))
}

/// `GET /movies/director/{director}`
#[utoipa::path(
    get,
    path = "/movies/director/{director}",
    tag = "Queries",
    params(
        ("director" = String, Path, description = "Director name, matched case-insensitively"),
    ),
    responses(
        (status = 200, description = "Movies by the director", body = [Movie]),
        (status = 404, description = "No matches", body = crate::error::ApiErrorBody),
    )
)]
pub async fn by_director(
    State(state): State<AppState>,
    Path(director): Path<String>,
) -> ApiResult<Json<Vec<Movie>>> {
    let needle = director.to_lowercase();
    let matches: Vec<Movie> = state
        .catalog
        .all()?
        .into_iter()
        .filter(|movie| movie.director.to_lowercase() == needle)
        .collect();
    if matches.is_empty() {
        return Err(ApiError::not_found("No movies found for this director"));
    }
    Ok(Json(matches))
}

/// `GET /movies/search?keyword=...`
///
/// A missing or empty keyword is a 400, distinct from the 404 for zero
/// matches.
#[utoipa::path(
    get,
    path = "/movies/search",
    tag = "Queries",
    params(SearchParams),
    responses(
        (status = 200, description = "Movies whose title contains the keyword", body = [Movie]),
        (status = 400, description = "Missing keyword", body = crate::error::ApiErrorBody),
        (status = 404, description = "No matches", body = crate::error::ApiErrorBody),
    )
)]
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> ApiResult<Json<Vec<Movie>>> {
    let keyword = params.keyword.as_deref().map(str::trim).unwrap_or_default();
    if keyword.is_empty() {
        return Err(ApiError::bad_request("Keyword query parameter is required"));
    }

    let needle = keyword.to_lowercase();
    let matches: Vec<Movie> = state
        .catalog
        .all()?
        .into_iter()
        .filter(|movie| movie.title.to_lowercase().contains(&needle))
        .collect();
    if matches.is_empty() {
        return Err(ApiError::not_found("No movies found matching the keyword"));
    }
    Ok(Json(matches))
}
