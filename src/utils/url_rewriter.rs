//! Destination validation, UTM tagging and external link construction.
//!
//! The rewriter leaves every part of the submitted URL alone except the query
//! string, and only ever appends to it: parameters the caller already set
//! always win over the UTM defaults.

use url::Url;
use url::form_urlencoded;

use crate::domain::entities::LinkOptions;
use crate::error::AppError;

/// Fixed UTM parameters added when tagging is requested, in output order.
pub const UTM_DEFAULTS: [(&str, &str); 3] = [
    ("utm_source", "affiliate_cloner"),
    ("utm_medium", "cloned_link"),
    ("utm_campaign", "affiliate_campaign"),
];

/// Query key carrying the caller's tracking id.
pub const UTM_CONTENT: &str = "utm_content";

/// Which domain source produced an external link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainSource {
    /// Per-request custom domain.
    Custom,
    /// Server-wide alternate domain.
    Alternate,
    /// Origin the request reached the service on.
    Origin,
}

/// Externally visible short link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalLink {
    pub url: String,
    pub source: DomainSource,
}

impl ExternalLink {
    pub fn custom_domain_used(&self) -> bool {
        self.source == DomainSource::Custom
    }

    pub fn alt_domain_used(&self) -> bool {
        self.source == DomainSource::Alternate
    }
}

/// Validates a submitted destination URL.
///
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns [`AppError::InvalidUrl`] when the input is blank, does not parse,
/// or uses a scheme other than `http`/`https`.
pub fn validate_url(input: &str) -> Result<Url, AppError> {
    let input = input.trim();

    if input.is_empty() {
        return Err(AppError::invalid_url("missing url"));
    }

    let url = Url::parse(input)
        .map_err(|_| AppError::invalid_url("url must start with http:// or https://"))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(AppError::invalid_url(
            "url must start with http:// or https://",
        )),
    }
}

/// Appends the UTM defaults (and `utm_content`) that are not already present.
///
/// A key only counts as present when it has a non-empty value, so
/// `utm_source=` still receives the default.
///
/// Works on the raw string so existing pairs keep their order and encoding;
/// new pairs are form-urlencoded and inserted before any fragment.
pub fn add_utm_parameters(url: &str, tracking_id: Option<&str>) -> String {
    let (without_fragment, fragment) = match url.split_once('#') {
        Some((head, fragment)) => (head, Some(fragment)),
        None => (url, None),
    };

    let (base, query) = match without_fragment.split_once('?') {
        Some((base, query)) => (base, query),
        None => (without_fragment, ""),
    };

    // Blank values (`utm_source=`) count as absent; the raw pair stays in place.
    let existing: Vec<String> = form_urlencoded::parse(query.as_bytes())
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, _)| key.into_owned())
        .collect();

    let wanted = UTM_DEFAULTS
        .iter()
        .copied()
        .chain(tracking_id.map(|id| (UTM_CONTENT, id)));

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    let mut added = 0;
    for (key, value) in wanted {
        if !existing.iter().any(|k| k == key) {
            serializer.append_pair(key, value);
            added += 1;
        }
    }

    if added == 0 {
        return url.to_string();
    }

    let appended = serializer.finish();
    let mut result = String::with_capacity(url.len() + appended.len() + 2);
    result.push_str(base);
    result.push('?');
    if !query.is_empty() {
        result.push_str(query);
        if !query.ends_with('&') {
            result.push('&');
        }
    }
    result.push_str(&appended);
    if let Some(fragment) = fragment {
        result.push('#');
        result.push_str(fragment);
    }

    result
}

/// Normalizes a domain into a base URL: adds `https://` when no http(s)
/// scheme is given and strips trailing slashes.
pub fn normalize_domain(domain: &str) -> String {
    let domain = domain.trim();

    let with_scheme = if domain.starts_with("http://") || domain.starts_with("https://") {
        domain.to_string()
    } else {
        format!("https://{}", domain)
    };

    with_scheme.trim_end_matches('/').to_string()
}

/// Builds stored targets and external short links.
///
/// Holds the server-wide alternate domain, injected at construction so the
/// domain priority chain never depends on process environment.
#[derive(Debug, Clone, Default)]
pub struct UrlRewriter {
    alt_domain: Option<String>,
}

impl UrlRewriter {
    /// Creates a rewriter; a blank alternate domain disables that source.
    pub fn new(alt_domain: Option<String>) -> Self {
        let alt_domain = alt_domain
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        Self { alt_domain }
    }

    /// Configured alternate domain, if any.
    pub fn alt_domain(&self) -> Option<&str> {
        self.alt_domain.as_deref()
    }

    pub fn alt_domain_enabled(&self) -> bool {
        self.alt_domain.is_some()
    }

    /// Produces the URL to store for a validated destination.
    ///
    /// Without `add_utm` the input is returned unchanged.
    pub fn build_target(&self, original_url: &str, options: &LinkOptions) -> String {
        if options.add_utm {
            add_utm_parameters(original_url, options.tracking_id.as_deref())
        } else {
            original_url.to_string()
        }
    }

    /// Picks exactly one domain source for the external link.
    ///
    /// Priority with `use_alt_domain`: custom domain, then the configured
    /// alternate domain, then `default_base_url`. Without it the default
    /// base is always used.
    pub fn build_external_link(
        &self,
        id: &str,
        options: &LinkOptions,
        default_base_url: &str,
    ) -> ExternalLink {
        let (base, source) = match (
            options.use_alt_domain,
            options.custom_domain.as_deref(),
            self.alt_domain.as_deref(),
        ) {
            (true, Some(custom), _) => (normalize_domain(custom), DomainSource::Custom),
            (true, None, Some(alt)) => (normalize_domain(alt), DomainSource::Alternate),
            _ => (
                default_base_url.trim_end_matches('/').to_string(),
                DomainSource::Origin,
            ),
        };

        ExternalLink {
            url: format!("{}/{}", base, id),
            source,
        }
    }
}
