//! Request extractors shared by the JSON handlers.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON body extractor that ignores `Content-Type`.
///
/// Browser forms send `application/json`, but plain `curl -d` clients send
/// `application/x-www-form-urlencoded` or nothing; the body is parsed as JSON
/// either way. Any read or parse failure becomes [`AppError::Validation`].
#[derive(Debug, Clone, Copy, Default)]
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
            .map_err(|e| AppError::bad_request(format!("invalid request body: {}", e.body_text())))?;

        parse_json(&bytes).map(JsonBody)
    }
}

/// Parses a JSON document into `T`.
///
/// # Errors
///
/// Returns [`AppError::Validation`] with the parser message.
pub fn parse_json<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, AppError> {
    serde_json::from_slice(bytes)
        .map_err(|e| AppError::bad_request(format!("invalid JSON body: {}", e)))
}
