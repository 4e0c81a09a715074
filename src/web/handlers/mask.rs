//! Interstitial page shown before redirecting masked links.

use askama::Template;
use askama_web::WebTemplate;

/// Seconds before the page navigates on its own.
pub const COUNTDOWN_SECONDS: u32 = 10;

/// Template for the masking page.
///
/// Renders `templates/mask.html`. `target_url` is HTML-escaped by askama,
/// so a stored destination can never inject markup into the page.
#[derive(Debug, Template, WebTemplate)]
#[template(path = "mask.html")]
pub struct MaskTemplate {
    pub target_url: String,
    pub short_id: String,
    pub countdown_seconds: u32,
}

impl MaskTemplate {
    pub fn new(target_url: String, short_id: String) -> Self {
        Self {
            target_url,
            short_id,
            countdown_seconds: COUNTDOWN_SECONDS,
        }
    }
}
