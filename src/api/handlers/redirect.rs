//! Handlers for short id resolution.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use url::Url;

use crate::domain::RedirectOutcome;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::handlers::MaskTemplate;

/// Plain-text body for unknown ids.
const NOT_FOUND_BODY: &str = "Link not found";

/// Resolves a short id to a redirect or the masking page.
///
/// # Endpoint
///
/// `GET /{id}`
///
/// # Responses
///
/// - **302 Found** with `Location` when masking is off
/// - **200 OK** masking page when masking is on
/// - **404 Not Found** `Link not found` for unknown ids
///
/// # Errors
///
/// Returns 500 if the store fails.
pub async fn redirect_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let outcome = state.redirect_service.resolve(&id).await?;

    match outcome {
        RedirectOutcome::NotFound => Ok(not_found()),
        RedirectOutcome::DirectRedirect { target } => found(&target),
        RedirectOutcome::MaskedPage { target, id } => {
            Ok(MaskTemplate::new(target, id).into_response())
        }
    }
}

/// Final redirect behind the masking page.
///
/// # Endpoint
///
/// `GET /go/{id}`
///
/// Always redirects when the id exists, whatever its masking flag.
///
/// # Errors
///
/// Returns 500 if the store fails.
pub async fn continue_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let outcome = state.redirect_service.resolve(&id).await?;

    match outcome.target() {
        Some(target) => found(target),
        None => Ok(not_found()),
    }
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, NOT_FOUND_BODY).into_response()
}

/// Builds a 302 response for `target`.
fn found(target: &str) -> Result<Response, AppError> {
    let location = location_header(target)?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

/// Converts a stored target into a `Location` value.
///
/// Targets are stored as submitted, so non-ASCII characters are possible;
/// those are percent-encoded (and IDN hosts punycoded) through `url`.
fn location_header(target: &str) -> Result<HeaderValue, AppError> {
    if let Ok(value) = HeaderValue::from_str(target) {
        return Ok(value);
    }

    let encoded = Url::parse(target)
        .map_err(|_| AppError::internal("Stored target is not a valid URL"))?;

    HeaderValue::from_str(encoded.as_str())
        .map_err(|_| AppError::internal("Stored target is not a valid header value"))
}
