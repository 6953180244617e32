//! API error types and HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use marquee_core::validate::ValidationIssue;
use marquee_core::Error as CoreError;

/// API result type.
pub type ApiResult<T> = Result<T, ApiError>;

/// Standard JSON error response body.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiErrorBody {
    /// Human-readable message (safe for clients).
    pub error: String,
    /// Field-level validation issues. Present only when a request-body
    /// schema check failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<ValidationIssue>>,
}

/// HTTP API error carrying the contract status and body.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    details: Option<Vec<ValidationIssue>>,
}

impl ApiError {
    /// Returns an error response for invalid input.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Returns an error response for missing resources.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Returns a 400 carrying the field-level issues from a failed schema
    /// check.
    #[must_use]
    pub fn invalid_payload(details: Vec<ValidationIssue>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: "Validation failed".to_string(),
            details: Some(details),
        }
    }

    /// Returns the generic 400 for an unparseable request body.
    #[must_use]
    pub fn invalid_body() -> Self {
        Self::bad_request("Invalid request body")
    }

    /// Returns a 400 for a duplicate movie id on create.
    ///
    /// The published contract reports duplicates as 400, not 409.
    #[must_use]
    pub fn duplicate_id() -> Self {
        Self::bad_request("Movie with this ID already exists")
    }

    /// Returns an internal error response.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the human-readable error message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            details: None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ApiErrorBody {
                error: self.message,
                details: self.details,
            }),
        )
            .into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(value: CoreError) -> Self {
        match value {
            CoreError::AlreadyExists { .. } => Self::duplicate_id(),
            CoreError::NotFound { .. } => Self::not_found("Movie not found"),
            CoreError::InvalidInput(message) => Self::bad_request(message),
            CoreError::Internal { message } => Self::internal(message),
        }
    }
}
