//! Public base URL resolution from configuration or request headers.

use axum::http::{HeaderMap, Uri, header};

/// Resolves the base URL that short codes are appended to.
///
/// Priority:
/// 1. The configured `BASE_URL`
/// 2. `http://` + the request `Host` header (port preserved)
/// 3. `http://` + the authority of an absolute request URI
/// 4. `http://localhost`
///
/// Trailing slashes are removed so the result can be joined with `/{code}`.
///
/// The `Host` header is client-supplied. Deployments behind a reverse proxy
/// should set `BASE_URL` so short URLs point at the public address.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "sho.rt:8080".parse().unwrap());
///
/// let base = resolve_base_url(None, &headers, &Uri::from_static("/api/shorten"));
/// assert_eq!(base, "http://sho.rt:8080");
/// ```
pub fn resolve_base_url(configured: Option<&str>, headers: &HeaderMap, uri: &Uri) -> String {
    if let Some(base) = configured {
        return base.trim_end_matches('/').to_string();
    }

    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .filter(|h| !h.is_empty())
        .map(str::to_string)
        .or_else(|| uri.authority().map(|a| a.to_string()))
        .unwrap_or_else(|| "localhost".to_string());

    format!("http://{}", host.trim_end_matches('/'))
}

/// Joins a base URL and a short code into the full short URL.
pub fn build_short_url(base_url: &str, code: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn relative_uri() -> Uri {
        Uri::from_static("/api/shorten")
    }

    #[test]
    fn test_configured_base_url_wins() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("ignored.com"));

        let base = resolve_base_url(Some("https://sho.rt/"), &headers, &relative_uri());
        assert_eq!(base, "https://sho.rt");
    }

    #[test]
    fn test_host_header_keeps_port() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("localhost:3000"));

        let base = resolve_base_url(None, &headers, &relative_uri());
        assert_eq!(base, "http://localhost:3000");
    }

    #[test]
    fn test_ipv6_host_header() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("[::1]:8080"));

        let base = resolve_base_url(None, &headers, &relative_uri());
        assert_eq!(base, "http://[::1]:8080");
    }

    #[test]
    fn test_falls_back_to_uri_authority() {
        let uri = Uri::from_static("http://example.org:9000/api/shorten");

        let base = resolve_base_url(None, &HeaderMap::new(), &uri);
        assert_eq!(base, "http://example.org:9000");
    }

    #[test]
    fn test_falls_back_to_localhost() {
        let base = resolve_base_url(None, &HeaderMap::new(), &relative_uri());
        assert_eq!(base, "http://localhost");
    }

    #[test]
    fn test_build_short_url() {
        assert_eq!(
            build_short_url("http://localhost:3000", "abc123"),
            "http://localhost:3000/abc123"
        );
        assert_eq!(
            build_short_url("https://sho.rt/", "abc123"),
            "https://sho.rt/abc123"
        );
    }
}
