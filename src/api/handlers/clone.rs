//! Handler for the link cloning endpoint.

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, Uri},
};
use validator::Validate;

use crate::api::dto::clone::{CloneRequest, CloneResponse};
use crate::api::extract::JsonBody;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::extract_origin::extract_origin;

/// Clones a link with UTM tagging, domain and masking options.
///
/// # Endpoint
///
/// `POST /api/clone`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://shop.example/aff?id=42",
///   "useAltDomain": false,
///   "customDomain": "",
///   "addUtm": true,
///   "trackingId": "camp1",
///   "applyMask": true
/// }
/// ```
///
/// Only `url` is required; `applyMask` defaults to `true`, every other flag
/// to `false`.
///
/// # Response
///
/// ```json
/// {
///   "short_id": "k3x9q2ab",
///   "cloned_url": "http://localhost:5000/k3x9q2ab",
///   "original_url": "https://shop.example/aff?id=42",
///   "processed_url": "https://shop.example/aff?id=42&utm_source=affiliate_cloner&...",
///   "masked": true,
///   "utm_added": true,
///   "tracking_id": "camp1",
///   "alt_domain_enabled": false,
///   "alt_domain_used": false,
///   "custom_domain_used": false,
///   "custom_domain": null
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for invalid input, 500 if id allocation or the
/// store fails.
pub async fn clone_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    JsonBody(payload): JsonBody<CloneRequest>,
) -> Result<Json<CloneResponse>, AppError> {
    payload.validate()?;

    let (url, options) = payload.into_parts();
    let url = url.ok_or_else(|| AppError::invalid_url("missing url"))?;
    let origin = extract_origin(&headers, &uri)?;

    let cloned = state.link_service.clone_link(&url, options, &origin).await?;

    Ok(Json(CloneResponse::new(
        cloned,
        state.rewriter().alt_domain_enabled(),
    )))
}
