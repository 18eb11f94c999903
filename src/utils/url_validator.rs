//! Target URL validation.
//!
//! Submitted URLs are checked but never rewritten: the string that passes
//! validation is the string replayed in the redirect `Location` header.

use url::Url;

/// Reasons a submitted URL is rejected.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL must not be empty")]
    Empty,

    #[error("URL must not have leading or trailing whitespace")]
    SurroundingWhitespace,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("URL must be absolute and include a host (scheme://host)")]
    MissingHost,

    #[error("URL contains characters that cannot be sent in a Location header")]
    NotHeaderSafe,
}

/// Validates that `input` is an absolute URL with a scheme and a host.
///
/// # Rules
///
/// 1. Non-empty after trimming, and no surrounding whitespace
/// 2. Parses with the WHATWG URL parser
/// 3. Written in `scheme://authority` form with a non-empty host
/// 4. Printable ASCII only, so it can be sent verbatim as a header value
///
/// # Examples
///
/// ```ignore
/// assert!(validate_url("https://example.com").is_ok());
/// assert_eq!(validate_url(""), Err(UrlValidationError::Empty));
/// assert!(matches!(validate_url("invalid-url"), Err(UrlValidationError::InvalidFormat(_))));
/// assert_eq!(validate_url("mailto:me@example.com"), Err(UrlValidationError::MissingHost));
/// ```
pub fn validate_url(input: &str) -> Result<(), UrlValidationError> {
    if input.trim().is_empty() {
        return Err(UrlValidationError::Empty);
    }

    if input.trim() != input {
        return Err(UrlValidationError::SurroundingWhitespace);
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    // `http:example.com` parses with a host but is not written as an absolute URL.
    let has_authority = input
        .get(url.scheme().len()..)
        .is_some_and(|rest| rest.starts_with("://"));

    if !has_authority || url.host_str().is_none_or(str::is_empty) {
        return Err(UrlValidationError::MissingHost);
    }

    if !input.bytes().all(|b| b.is_ascii_graphic()) {
        return Err(UrlValidationError::NotHeaderSafe);
    }

    Ok(())
}
