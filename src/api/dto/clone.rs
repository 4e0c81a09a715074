//! DTOs for the link cloning endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::ClonedLink;
use crate::domain::entities::LinkOptions;

fn default_apply_mask() -> bool {
    true
}

/// Request to clone a link with presentation options.
///
/// Field names follow the browser form (camelCase).
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CloneRequest {
    /// Destination URL (must be HTTP/HTTPS).
    #[validate(length(max = 2048))]
    pub url: Option<String>,

    /// Prefer a custom or configured alternate domain for the short link.
    #[serde(default)]
    pub use_alt_domain: bool,

    /// Per-request domain, used only together with `useAltDomain`.
    #[validate(length(max = 253))]
    pub custom_domain: Option<String>,

    /// Merge UTM parameters into the stored destination.
    #[serde(default)]
    pub add_utm: bool,

    /// Free-form tag propagated into `utm_content`.
    #[validate(length(max = 128))]
    pub tracking_id: Option<String>,

    /// Show the masking page before redirecting (default: true).
    #[serde(default = "default_apply_mask")]
    pub apply_mask: bool,
}

impl CloneRequest {
    /// Splits the request into the URL and normalized options.
    pub fn into_parts(self) -> (Option<String>, LinkOptions) {
        let options = LinkOptions::new(
            self.use_alt_domain,
            self.custom_domain,
            self.add_utm,
            self.tracking_id,
            self.apply_mask,
        );

        (self.url, options)
    }
}

/// Response describing the created link.
#[derive(Debug, Serialize)]
pub struct CloneResponse {
    pub short_id: String,
    pub cloned_url: String,
    pub original_url: String,
    pub processed_url: String,
    pub masked: bool,
    pub utm_added: bool,
    pub tracking_id: Option<String>,
    pub alt_domain_enabled: bool,
    pub alt_domain_used: bool,
    pub custom_domain_used: bool,
    pub custom_domain: Option<String>,
}

impl CloneResponse {
    pub fn new(cloned: ClonedLink, alt_domain_enabled: bool) -> Self {
        Self {
            alt_domain_used: cloned.external.alt_domain_used(),
            custom_domain_used: cloned.external.custom_domain_used(),
            short_id: cloned.link.id,
            cloned_url: cloned.external.url,
            original_url: cloned.original_url,
            processed_url: cloned.link.target,
            masked: cloned.link.apply_mask,
            utm_added: cloned.link.add_utm,
            tracking_id: cloned.link.tracking_id,
            alt_domain_enabled,
            custom_domain: cloned.custom_domain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_only_url_given() {
        let request: CloneRequest =
            serde_json::from_str(r#"{"url": "https://example.com"}"#).unwrap();

        assert!(!request.use_alt_domain);
        assert!(!request.add_utm);
        assert!(request.apply_mask);
        assert!(request.custom_domain.is_none());
        assert!(request.tracking_id.is_none());
    }

    #[test]
    fn test_camel_case_fields() {
        let request: CloneRequest = serde_json::from_str(
            r#"{
                "url": "https://example.com",
                "useAltDomain": true,
                "customDomain": " go.example.com ",
                "addUtm": true,
                "trackingId": "",
                "applyMask": false
            }"#,
        )
        .unwrap();

        let (url, options) = request.into_parts();

        assert_eq!(url.as_deref(), Some("https://example.com"));
        assert!(options.use_alt_domain);
        assert_eq!(options.custom_domain.as_deref(), Some("go.example.com"));
        assert!(options.add_utm);
        assert!(options.tracking_id.is_none());
        assert!(!options.apply_mask);
    }

    #[test]
    fn test_tracking_id_length_limit() {
        let request = CloneRequest {
            url: Some("https://example.com".to_string()),
            use_alt_domain: false,
            custom_domain: None,
            add_utm: true,
            tracking_id: Some("x".repeat(129)),
            apply_mask: true,
        };

        assert!(request.validate().is_err());
    }
}
