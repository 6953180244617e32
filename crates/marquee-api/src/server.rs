//! API server implementation.
//!
//! Provides the health endpoint and the `/movies` surface for the Marquee
//! catalog.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::http::{header, HeaderValue, Method};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::ToSchema;

use marquee_core::{MovieCatalog, Result};

use crate::config::{Config, CorsConfig};
use crate::routes;
use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
}

/// Health check endpoint handler.
///
/// Returns 200 OK if the service is alive. This is a shallow check; the
/// catalog has no dependencies to verify.
async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// The Marquee API server.
#[derive(Debug)]
pub struct Server {
    config: Config,
    catalog: Arc<MovieCatalog>,
}

impl Server {
    /// Creates a new server with an empty catalog.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            catalog: Arc::new(MovieCatalog::new()),
        }
    }

    /// Creates the router with all routes and middleware.
    fn create_router(&self) -> Router {
        let state = AppState::with_catalog(self.config.clone(), Arc::clone(&self.catalog));

        let mut router = Router::new()
            .route("/health", get(health))
            .route("/openapi.json", get(crate::openapi::get_openapi_json))
            .merge(routes::movie_routes(state.clone()));

        if let Some(cors) = build_cors_layer(&self.config.cors) {
            router = router.layer(cors);
        }

        router.layer(TraceLayer::new_for_http()).with_state(state)
    }

    /// Starts the server and blocks until shutdown.
    ///
    /// # Errors
    ///
    /// Returns an error if the server cannot bind to the configured port.
    pub async fn serve(&self) -> Result<()> {
        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        let router = self.create_router();

        tracing::info!(http_port = self.config.http_port, "Starting Marquee API server");

        let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
            marquee_core::Error::Internal {
                message: format!("failed to bind to {addr}: {e}"),
            }
        })?;

        axum::serve(listener, router)
            .await
            .map_err(|e| marquee_core::Error::Internal {
                message: format!("server error: {e}"),
            })?;

        Ok(())
    }

    /// Creates a test router for the server.
    ///
    /// This is useful for integration tests where you want to exercise the
    /// routes without actually binding to a port.
    #[doc(hidden)]
    #[must_use]
    pub fn test_router(&self) -> Router {
        self.create_router()
    }
}

/// Builds the CORS layer from configuration.
///
/// Returns `None` when no origins are configured (CORS disabled).
fn build_cors_layer(cors_config: &CorsConfig) -> Option<CorsLayer> {
    if cors_config.allowed_origins.is_empty() {
        return None;
    }

    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(cors_config.max_age_seconds));

    if cors_config
        .allowed_origins
        .iter()
        .any(|origin| origin == "*")
    {
        return Some(cors.allow_origin(Any));
    }

    let allowed: Vec<HeaderValue> = cors_config
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::error!(origin = %origin, "Invalid CORS origin; expected a valid HeaderValue");
                None
            }
        })
        .collect();

    if allowed.is_empty() {
        tracing::warn!("All configured CORS origins were invalid; disabling CORS");
        None
    } else {
        Some(cors.allow_origin(AllowOrigin::list(allowed)))
    }
}
