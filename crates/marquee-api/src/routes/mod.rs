//! HTTP route groups for the movie catalog.

pub mod guard;
pub mod movies;
pub mod queries;

use axum::middleware;
use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// All `/movies` routes.
///
/// Id-scoped routes carry the existence guard as a route layer, so an
/// unknown id short-circuits with 404 before body parsing or handler
/// logic. Literal routes (`top-rated`, `search`, `genre/...`,
/// `director/...`) coexist with `/movies/:id` because axum prioritizes
/// static path segments over captures.
pub fn movie_routes(state: AppState) -> Router<AppState> {
    let id_scoped = Router::new()
        .route(
            "/movies/:id",
            get(movies::get_movie)
                .patch(movies::update_movie)
                .delete(movies::delete_movie),
        )
        .route(
            "/movies/:id/rating",
            post(movies::rate_movie).get(movies::get_rating_summary),
        )
        .route_layer(middleware::from_fn_with_state(state, guard::require_movie));

    Router::new()
        .route("/movies", post(movies::create_movie))
        .route("/movies/top-rated", get(queries::top_rated))
        .route("/movies/genre/:genre", get(queries::by_genre))
        .route("/movies/director/:director", get(queries::by_director))
        .route("/movies/search", get(queries::search))
        .merge(id_scoped)
}
