//! API route configuration.

use crate::api::handlers::{clone_handler, config_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// JSON API routes, nested under `/api`.
///
/// # Endpoints
///
/// - `POST /shorten` - Create a short link with default options
/// - `POST /clone`   - Create a link with UTM, domain and masking options
/// - `GET  /config`  - Feature and alternate domain configuration
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/clone", post(clone_handler))
        .route("/config", get(config_handler))
}
