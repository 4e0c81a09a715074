//! DTOs for the public configuration endpoint.

use serde::Serialize;

/// Feature switches exposed to the browser form.
#[derive(Debug, Serialize)]
pub struct Features {
    pub url_masking: bool,
    pub utm_parameters: bool,
    pub alternative_domain: bool,
    pub tracking_id: bool,
}

#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub alt_domain_enabled: bool,
    pub alt_domain: Option<String>,
    pub service: String,
    pub features: Features,
}
