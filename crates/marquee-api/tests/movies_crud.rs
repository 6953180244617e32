//! Integration tests for movie create/read/update/delete endpoints.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use marquee_api::{Config, Server};
use serde_json::{json, Value};
use tower::ServiceExt;

fn test_router() -> Router {
    Server::new(Config::default()).test_router()
}

async fn api_request(
    router: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> Result<(StatusCode, Value), String> {
    let builder = Request::builder().method(method).uri(uri);

    let req = if let Some(payload) = body {
        let bytes =
            serde_json::to_vec(&payload).map_err(|err| format!("serialize request body: {err}"))?;
        builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(bytes))
            .map_err(|err| format!("build request: {err}"))?
    } else {
        builder
            .body(Body::empty())
            .map_err(|err| format!("build request: {err}"))?
    };

    let response = router
        .clone()
        .oneshot(req)
        .await
        .map_err(|err| format!("route request: {err}"))?;
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .map_err(|err| format!("read response body: {err}"))?;

    let parsed = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).map_err(|err| format!("parse response body: {err}"))?
    };
    Ok((status, parsed))
}

fn matrix_payload() -> Value {
    json!({
        "id": "tt0133093",
        "title": "The Matrix",
        "director": "Lana Wachowski",
        "releaseYear": 1999,
        "genre": "Sci-Fi"
    })
}

#[tokio::test]
async fn create_then_get_roundtrip() -> Result<(), String> {
    let router = test_router();

    let (status, created) =
        api_request(&router, Method::POST, "/movies", Some(matrix_payload())).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        created.get("message").and_then(Value::as_str),
        Some("Movie added successfully")
    );

    let (status, movie) =
        api_request(&router, Method::GET, "/movies/tt0133093", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(movie.get("title").and_then(Value::as_str), Some("The Matrix"));
    assert_eq!(
        movie.get("director").and_then(Value::as_str),
        Some("Lana Wachowski")
    );
    assert_eq!(movie.get("releaseYear").and_then(Value::as_i64), Some(1999));
    assert_eq!(movie.get("genre").and_then(Value::as_str), Some("Sci-Fi"));
    assert_eq!(
        movie.get("ratings").and_then(Value::as_array).map(Vec::len),
        Some(0)
    );
    Ok(())
}

#[tokio::test]
async fn duplicate_id_is_rejected_with_400_and_store_unchanged() -> Result<(), String> {
    let router = test_router();

    let (status, _) =
        api_request(&router, Method::POST, "/movies", Some(matrix_payload())).await?;
    assert_eq!(status, StatusCode::CREATED);

    let mut impostor = matrix_payload();
    impostor["title"] = json!("Not The Matrix");
    let (status, error) = api_request(&router, Method::POST, "/movies", Some(impostor)).await?;
    // The published contract uses 400 for duplicate ids, not 409.
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        error.get("error").and_then(Value::as_str),
        Some("Movie with this ID already exists")
    );

    let (status, movie) =
        api_request(&router, Method::GET, "/movies/tt0133093", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(movie.get("title").and_then(Value::as_str), Some("The Matrix"));
    Ok(())
}

#[tokio::test]
async fn create_with_missing_and_empty_fields_reports_every_issue() -> Result<(), String> {
    let router = test_router();

    let (status, error) = api_request(
        &router,
        Method::POST,
        "/movies",
        Some(json!({
            "id": "m1",
            "title": "",
            "releaseYear": 1999
        })),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        error.get("error").and_then(Value::as_str),
        Some("Validation failed")
    );

    let details = error
        .get("details")
        .and_then(Value::as_array)
        .ok_or_else(|| "details should be an array".to_string())?;
    let fields: Vec<&str> = details
        .iter()
        .filter_map(|issue| issue.get("field").and_then(Value::as_str))
        .collect();
    assert_eq!(fields, vec!["title", "director", "genre"]);
    Ok(())
}

#[tokio::test]
async fn create_rejects_out_of_range_release_year() -> Result<(), String> {
    let router = test_router();

    for year in [1887, 3000] {
        let mut payload = matrix_payload();
        payload["releaseYear"] = json!(year);
        let (status, error) = api_request(&router, Method::POST, "/movies", Some(payload)).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST, "year {year} should fail");
        let details = error
            .get("details")
            .and_then(Value::as_array)
            .ok_or_else(|| "details should be an array".to_string())?;
        assert_eq!(
            details[0].get("field").and_then(Value::as_str),
            Some("releaseYear")
        );
    }
    Ok(())
}

#[tokio::test]
async fn malformed_body_collapses_to_generic_400() -> Result<(), String> {
    let router = test_router();

    let req = Request::builder()
        .method(Method::POST)
        .uri("/movies")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("not json"))
        .map_err(|err| format!("build request: {err}"))?;
    let response = router
        .clone()
        .oneshot(req)
        .await
        .map_err(|err| format!("route request: {err}"))?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = axum::body::to_bytes(response.into_body(), 1024)
        .await
        .map_err(|err| format!("read response body: {err}"))?;
    let error: Value =
        serde_json::from_slice(&body).map_err(|err| format!("parse response body: {err}"))?;
    assert_eq!(
        error.get("error").and_then(Value::as_str),
        Some("Invalid request body")
    );
    assert!(error.get("details").is_none());
    Ok(())
}

#[tokio::test]
async fn partial_update_changes_only_the_given_fields() -> Result<(), String> {
    let router = test_router();
    api_request(&router, Method::POST, "/movies", Some(matrix_payload())).await?;

    let (status, updated) = api_request(
        &router,
        Method::PATCH,
        "/movies/tt0133093",
        Some(json!({ "genre": "Horror" })),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        updated.get("message").and_then(Value::as_str),
        Some("Movie updated successfully")
    );

    let movie = updated
        .get("movie")
        .ok_or_else(|| "response should carry the merged movie".to_string())?;
    assert_eq!(movie.get("genre").and_then(Value::as_str), Some("Horror"));
    assert_eq!(movie.get("title").and_then(Value::as_str), Some("The Matrix"));
    assert_eq!(
        movie.get("director").and_then(Value::as_str),
        Some("Lana Wachowski")
    );
    assert_eq!(movie.get("releaseYear").and_then(Value::as_i64), Some(1999));
    assert_eq!(
        movie.get("ratings").and_then(Value::as_array).map(Vec::len),
        Some(0)
    );
    Ok(())
}

#[tokio::test]
async fn update_ignores_id_and_ratings_in_the_payload() -> Result<(), String> {
    let router = test_router();
    api_request(&router, Method::POST, "/movies", Some(matrix_payload())).await?;

    let (status, _) = api_request(
        &router,
        Method::PATCH,
        "/movies/tt0133093",
        Some(json!({
            "id": "hijacked",
            "ratings": [1, 1, 1],
            "title": "The Matrix Reloaded"
        })),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);

    let (status, movie) =
        api_request(&router, Method::GET, "/movies/tt0133093", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(movie.get("id").and_then(Value::as_str), Some("tt0133093"));
    assert_eq!(
        movie.get("title").and_then(Value::as_str),
        Some("The Matrix Reloaded")
    );
    assert_eq!(
        movie.get("ratings").and_then(Value::as_array).map(Vec::len),
        Some(0)
    );

    let (status, _) = api_request(&router, Method::GET, "/movies/hijacked", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn update_rejects_empty_replacement_fields() -> Result<(), String> {
    let router = test_router();
    api_request(&router, Method::POST, "/movies", Some(matrix_payload())).await?;

    let (status, error) = api_request(
        &router,
        Method::PATCH,
        "/movies/tt0133093",
        Some(json!({ "title": "" })),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error.get("details").is_some());
    Ok(())
}

#[tokio::test]
async fn delete_then_get_is_404() -> Result<(), String> {
    let router = test_router();
    api_request(&router, Method::POST, "/movies", Some(matrix_payload())).await?;

    let (status, deleted) =
        api_request(&router, Method::DELETE, "/movies/tt0133093", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        deleted.get("message").and_then(Value::as_str),
        Some("Movie deleted successfully")
    );

    let (status, error) =
        api_request(&router, Method::GET, "/movies/tt0133093", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        error.get("error").and_then(Value::as_str),
        Some("Movie not found")
    );
    Ok(())
}

#[tokio::test]
async fn id_scoped_routes_404_before_any_validation() -> Result<(), String> {
    let router = test_router();

    for (method, uri, body) in [
        (Method::GET, "/movies/missing", None),
        (Method::PATCH, "/movies/missing", Some(json!({ "title": "" }))),
        (Method::DELETE, "/movies/missing", None),
        // Invalid rating payload; the guard must still win with 404.
        (
            Method::POST,
            "/movies/missing/rating",
            Some(json!({ "rating": 99 })),
        ),
        (Method::GET, "/movies/missing/rating", None),
    ] {
        let (status, error) = api_request(&router, method.clone(), uri, body).await?;
        assert_eq!(status, StatusCode::NOT_FOUND, "{method} {uri}");
        assert_eq!(
            error.get("error").and_then(Value::as_str),
            Some("Movie not found"),
            "{method} {uri}"
        );
    }
    Ok(())
}
