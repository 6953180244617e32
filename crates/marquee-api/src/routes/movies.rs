//! Create, read, update, delete, and rating endpoints for single movies.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use marquee_core::{Movie, MovieUpdate, Validator};

use crate::error::{ApiError, ApiResult};
use crate::extract::ApiJson;
use crate::state::AppState;

/// `POST /movies` request body.
///
/// Every field is optional at the serde level so that presence and
/// emptiness failures surface as field-level issues instead of a generic
/// body rejection.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMovieRequest {
    /// Caller-supplied unique movie id.
    pub id: Option<String>,
    /// Movie title.
    pub title: Option<String>,
    /// Movie director.
    pub director: Option<String>,
    /// Release year.
    pub release_year: Option<i64>,
    /// Genre label.
    pub genre: Option<String>,
}

/// `PATCH /movies/{id}` request body. All fields optional; fields outside
/// this set (including `id` and `ratings`) are ignored, not rejected.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMovieRequest {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement director.
    pub director: Option<String>,
    /// Replacement release year.
    pub release_year: Option<i64>,
    /// Replacement genre.
    pub genre: Option<String>,
}

/// `POST /movies/{id}/rating` request body.
#[derive(Debug, Deserialize, ToSchema)]
pub struct RateMovieRequest {
    /// Rating value, an integer from 1 to 5.
    pub rating: Option<i64>,
}

/// Mutation response carrying a confirmation message and the affected
/// movie.
#[derive(Debug, Serialize, ToSchema)]
pub struct MovieResponse {
    /// Confirmation message.
    pub message: String,
    /// The stored movie after the mutation.
    pub movie: Movie,
}

/// Bare confirmation message response.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    /// Confirmation message.
    pub message: String,
}

/// `GET /movies/{id}/rating` success body.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RatingSummary {
    /// The movie the summary was computed for.
    pub movie_id: String,
    /// Arithmetic mean of all ratings, rounded to one decimal place.
    pub average_rating: f64,
    /// Number of ratings submitted so far.
    pub total_ratings: usize,
}

/// `POST /movies`
#[utoipa::path(
    post,
    path = "/movies",
    tag = "Movies",
    request_body = CreateMovieRequest,
    responses(
        (status = 201, description = "Movie created", body = MovieResponse),
        (status = 400, description = "Invalid payload or duplicate id", body = crate::error::ApiErrorBody),
    )
)]
pub async fn create_movie(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateMovieRequest>,
) -> ApiResult<(StatusCode, Json<MovieResponse>)> {
    let mut validator = Validator::new();
    let id = validator.require_string("id", req.id);
    let title = validator.require_string("title", req.title);
    let director = validator.require_string("director", req.director);
    let release_year = validator.require_release_year(req.release_year);
    let genre = validator.require_string("genre", req.genre);
    validator.finish().map_err(ApiError::invalid_payload)?;

    let (Some(id), Some(title), Some(director), Some(release_year), Some(genre)) =
        (id, title, director, release_year, genre)
    else {
        return Err(ApiError::internal("validated create payload incomplete"));
    };

    let movie = state.catalog.insert(Movie {
        id,
        title,
        director,
        release_year,
        genre,
        ratings: Vec::new(),
    })?;

    tracing::info!(id = %movie.id, title = %movie.title, "movie created");
    Ok((
        StatusCode::CREATED,
        Json(MovieResponse {
            message: "Movie added successfully".to_string(),
            movie,
        }),
    ))
}

/// `GET /movies/{id}`
#[utoipa::path(
    get,
    path = "/movies/{id}",
    tag = "Movies",
    params(
        ("id" = String, Path, description = "Movie id"),
    ),
    responses(
        (status = 200, description = "The movie record", body = Movie),
        (status = 404, description = "Unknown movie id", body = crate::error::ApiErrorBody),
    )
)]
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Movie>> {
    let movie = state.catalog.get(&id)?;
    Ok(Json(movie))
}

/// `PATCH /movies/{id}`
#[utoipa::path(
    patch,
    path = "/movies/{id}",
    tag = "Movies",
    params(
        ("id" = String, Path, description = "Movie id"),
    ),
    request_body = UpdateMovieRequest,
    responses(
        (status = 200, description = "The merged movie record", body = MovieResponse),
        (status = 400, description = "Invalid payload", body = crate::error::ApiErrorBody),
        (status = 404, description = "Unknown movie id", body = crate::error::ApiErrorBody),
    )
)]
pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<UpdateMovieRequest>,
) -> ApiResult<Json<MovieResponse>> {
    let mut validator = Validator::new();
    let update = MovieUpdate {
        title: validator.optional_string("title", req.title),
        director: validator.optional_string("director", req.director),
        release_year: match req.release_year {
            Some(year) => validator.release_year(year),
            None => None,
        },
        genre: validator.optional_string("genre", req.genre),
    };
    validator.finish().map_err(ApiError::invalid_payload)?;

    let movie = state.catalog.update(&id, update)?;
    tracing::info!(id = %movie.id, "movie updated");
    Ok(Json(MovieResponse {
        message: "Movie updated successfully".to_string(),
        movie,
    }))
}

/// `DELETE /movies/{id}`
#[utoipa::path(
    delete,
    path = "/movies/{id}",
    tag = "Movies",
    params(
        ("id" = String, Path, description = "Movie id"),
    ),
    responses(
        (status = 200, description = "Movie deleted", body = MessageResponse),
        (status = 404, description = "Unknown movie id", body = crate::error::ApiErrorBody),
    )
)]
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    state.catalog.remove(&id)?;
    tracing::info!(id = %id, "movie deleted");
    Ok(Json(MessageResponse {
        message: "Movie deleted successfully".to_string(),
    }))
}

/// `POST /movies/{id}/rating`
#[utoipa::path(
    post,
    path = "/movies/{id}/rating",
    tag = "Ratings",
    params(
        ("id" = String, Path, description = "Movie id"),
    ),
    request_body = RateMovieRequest,
    responses(
        (status = 200, description = "Rating appended", body = MovieResponse),
        (status = 400, description = "Invalid rating", body = crate::error::ApiErrorBody),
        (status = 404, description = "Unknown movie id", body = crate::error::ApiErrorBody),
    )
)]
pub async fn rate_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<RateMovieRequest>,
) -> ApiResult<Json<MovieResponse>> {
    let mut validator = Validator::new();
    let rating = validator.require_rating(req.rating);
    validator.finish().map_err(ApiError::invalid_payload)?;
    let Some(rating) = rating else {
        return Err(ApiError::internal("validated rating missing"));
    };

    let movie = state.catalog.add_rating(&id, rating)?;
    tracing::info!(id = %movie.id, rating = rating, "rating added");
    Ok(Json(MovieResponse {
        message: "Rating added successfully".to_string(),
        movie,
    }))
}

/// `GET /movies/{id}/rating`
///
/// An unrated movie yields 204 with a JSON `{ message }` body. The
/// status/body combination is part of the published contract and must not
/// be normalized to 200 or 404.
#[utoipa::path(
    get,
    path = "/movies/{id}/rating",
    tag = "Ratings",
    params(
        ("id" = String, Path, description = "Movie id"),
    ),
    responses(
        (status = 200, description = "Rating summary", body = RatingSummary),
        (status = 204, description = "No ratings submitted yet", body = MessageResponse),
        (status = 404, description = "Unknown movie id", body = crate::error::ApiErrorBody),
    )
)]
pub async fn get_rating_summary(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    let movie = state.catalog.get(&id)?;
    match movie.average_rating() {
        Some(average_rating) => Ok(Json(RatingSummary {
            total_ratings: movie.ratings.len(),
            movie_id: movie.id,
            average_rating,
        })
        .into_response()),
        None => Ok((
            StatusCode::NO_CONTENT,
            Json(MessageResponse {
                message: "No ratings yet for this movie".to_string(),
            }),
        )
            .into_response()),
    }
}
