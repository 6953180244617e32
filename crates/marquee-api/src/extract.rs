//! JSON body extraction with contract-shaped rejections.

use axum::async_trait;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// `Json` wrapper whose rejection is the contract's generic
/// `Invalid request body` 400 instead of axum's default rejection.
///
/// Both syntactically malformed bodies and typed-deserialization failures
/// collapse to the same response; field-level schema checks run in the
/// handlers afterwards.
#[derive(Debug)]
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!(error = %rejection, "rejected malformed request body");
                Err(ApiError::invalid_body())
            }
        }
    }
}
