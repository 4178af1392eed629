//! JSON body extractor that ignores the `Content-Type` header.

use crate::errors::AppError;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

/// Reads the whole request body and parses it as JSON.
///
/// Unlike `axum::Json`, a missing or foreign `Content-Type` is accepted.
/// Failures are rejected as [`AppError`] so they render as
/// `{"error": message}` with status 400.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::JsonBody;
///
/// async fn create(JsonBody(body): JsonBody<serde_json::Value>) -> String {
///     body.to_string()
/// }
/// ```
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        let value =
            serde_json::from_slice(&bytes).map_err(|e| AppError::InvalidJson(e.to_string()))?;

        Ok(JsonBody(value))
    }
}
