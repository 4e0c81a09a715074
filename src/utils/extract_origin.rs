//! Request origin extraction from HTTP request headers.

use crate::AppError;
use axum::http::{HeaderMap, Uri, header};

/// Header set by reverse proxies terminating TLS.
const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Extracts the origin (`scheme://host[:port]`) the request reached us on.
///
/// - Host comes from the `Host` header, falling back to the request URI
///   authority (HTTP/2 requests may carry only `:authority`)
/// - Scheme comes from `X-Forwarded-Proto` when it is `http` or `https`,
///   otherwise from the URI, otherwise `http`
/// - The port is kept, unlike the host-only domain used for routing
///
/// # Errors
///
/// Returns [`AppError::Validation`] if no host is available or the `Host`
/// header contains invalid UTF-8.
///
/// # Examples
///
/// ```
/// use axum::http::{HeaderMap, Uri, header};
/// use link_cloner::utils::extract_origin::extract_origin;
///
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "localhost:5000".parse().unwrap());
///
/// let origin = extract_origin(&headers, &Uri::from_static("/api/clone")).unwrap();
/// assert_eq!(origin, "http://localhost:5000");
///
/// headers.insert("x-forwarded-proto", "https".parse().unwrap());
/// let origin = extract_origin(&headers, &Uri::from_static("/api/clone")).unwrap();
/// assert_eq!(origin, "https://localhost:5000");
/// ```
pub fn extract_origin(headers: &HeaderMap, uri: &Uri) -> Result<String, AppError> {
    let host = match headers.get(header::HOST) {
        Some(value) => value
            .to_str()
            .map_err(|_| AppError::bad_request("Invalid Host header"))?
            .trim()
            .to_string(),
        None => uri
            .authority()
            .map(|a| a.as_str().to_string())
            .ok_or_else(|| AppError::bad_request("Missing Host header"))?,
    };

    if host.is_empty() {
        return Err(AppError::bad_request("Missing Host header"));
    }

    let forwarded = headers
        .get(FORWARDED_PROTO)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_ascii_lowercase())
        .filter(|v| v == "http" || v == "https");

    let scheme = forwarded
        .or_else(|| uri.scheme_str().map(str::to_string))
        .unwrap_or_else(|| "http".to_string());

    Ok(format!("{}://{}", scheme, host))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, HeaderValue, header};

    fn path() -> Uri {
        Uri::from_static("/api/clone")
    }

    #[test]
    fn test_extract_origin_simple() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("example.com"));

        let result = extract_origin(&headers, &path());
        assert_eq!(result.unwrap(), "http://example.com");
    }

    #[test]
    fn test_extract_origin_keeps_port() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("localhost:5000"));

        let result = extract_origin(&headers, &path());
        assert_eq!(result.unwrap(), "http://localhost:5000");
    }

    #[test]
    fn test_extract_origin_forwarded_https() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("s.example.com"));
        headers.insert(FORWARDED_PROTO, HeaderValue::from_static("https"));

        let result = extract_origin(&headers, &path());
        assert_eq!(result.unwrap(), "https://s.example.com");
    }

    #[test]
    fn test_extract_origin_forwarded_list_uses_first() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("s.example.com"));
        headers.insert(FORWARDED_PROTO, HeaderValue::from_static("HTTPS, http"));

        let result = extract_origin(&headers, &path());
        assert_eq!(result.unwrap(), "https://s.example.com");
    }

    #[test]
    fn test_extract_origin_ignores_unknown_forwarded_proto() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("s.example.com"));
        headers.insert(FORWARDED_PROTO, HeaderValue::from_static("gopher"));

        let result = extract_origin(&headers, &path());
        assert_eq!(result.unwrap(), "http://s.example.com");
    }

    #[test]
    fn test_extract_origin_ipv6_with_port() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("[::1]:8080"));

        let result = extract_origin(&headers, &path());
        assert_eq!(result.unwrap(), "http://[::1]:8080");
    }

    #[test]
    fn test_extract_origin_falls_back_to_uri_authority() {
        let headers = HeaderMap::new();
        let uri = Uri::from_static("https://s.example.com/api/clone");

        let result = extract_origin(&headers, &uri);
        assert_eq!(result.unwrap(), "https://s.example.com");
    }

    #[test]
    fn test_extract_origin_missing_host() {
        let headers = HeaderMap::new();

        let result = extract_origin(&headers, &path());
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_extract_origin_invalid_utf8() {
        let mut headers = HeaderMap::new();
        let invalid_bytes = vec![0xFF, 0xFE, 0xFD];
        if let Ok(header_value) = HeaderValue::from_bytes(&invalid_bytes) {
            headers.insert(header::HOST, header_value);

            let result = extract_origin(&headers, &path());
            assert!(result.is_err());
        }
    }
}
