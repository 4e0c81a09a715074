//! Browser page route configuration.

use crate::state::AppState;
use crate::web::handlers::home_handler;
use axum::{Router, routing::get};

/// Public HTML pages.
///
/// # Endpoints
///
/// - `GET /` - Link cloning form
///
/// The masking page is rendered by the redirect handler, not routed here.
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(home_handler))
}
