//! Link cloning form.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};

use crate::state::AppState;

/// Template for the home page.
///
/// Renders `templates/home.html`: the cloning form, which posts to
/// `/api/clone`, and a destination preview.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub alt_domain_enabled: bool,
    pub alt_domain: Option<String>,
}

/// Renders the link cloning form.
///
/// # Endpoint
///
/// `GET /`
pub async fn home_handler(State(state): State<AppState>) -> impl IntoResponse {
    let rewriter = state.rewriter();

    HomeTemplate {
        alt_domain_enabled: rewriter.alt_domain_enabled(),
        alt_domain: rewriter.alt_domain().map(str::to_string),
    }
}
