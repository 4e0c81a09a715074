//! Handler for the plain shortening endpoint.

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, Uri},
};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::api::extract::JsonBody;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::extract_origin::extract_origin;

/// Creates a masked short link on the request origin.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/page" }
/// ```
///
/// # Response
///
/// ```json
/// { "short_id": "k3x9q2ab", "short_url": "http://localhost:5000/k3x9q2ab" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for a missing, malformed or non-http(s) URL.
/// Returns 500 if no free id could be allocated or the store fails.
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    JsonBody(payload): JsonBody<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let url = payload
        .url
        .ok_or_else(|| AppError::invalid_url("missing url"))?;
    let origin = extract_origin(&headers, &uri)?;

    let shortened = state.link_service.shorten(&url, &origin).await?;

    Ok(Json(ShortenResponse {
        short_id: shortened.link.id,
        short_url: shortened.short_url,
    }))
}
