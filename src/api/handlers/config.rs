//! Handler for the public configuration endpoint.

use axum::{Json, extract::State};

use crate::api::dto::config::{ConfigResponse, Features};
use crate::state::{AppState, SERVICE_NAME};

/// Reports which optional features are available.
///
/// # Endpoint
///
/// `GET /api/config`
///
/// `alt_domain` is `null` unless a server-wide alternate domain is configured.
pub async fn config_handler(State(state): State<AppState>) -> Json<ConfigResponse> {
    let rewriter = state.rewriter();
    let alt_domain_enabled = rewriter.alt_domain_enabled();

    Json(ConfigResponse {
        alt_domain_enabled,
        alt_domain: rewriter.alt_domain().map(str::to_string),
        service: SERVICE_NAME.to_string(),
        features: Features {
            url_masking: true,
            utm_parameters: true,
            alternative_domain: alt_domain_enabled,
            tracking_id: true,
        },
    })
}
