//! DTOs for link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a URL.
///
/// `url` is optional at the serde level so that a missing field reaches
/// validation and is reported like any other invalid input.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten. Must be an absolute URL with a host.
    #[validate(
        required(message = "URL is required"),
        length(min = 1, message = "URL must not be empty")
    )]
    pub url: Option<String>,
}

/// Response for a newly created short link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_code: String,
    pub short_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_url_fails_validation() {
        let request: ShortenRequest = serde_json::from_str("{}").unwrap();
        let errors = request.validate().unwrap_err();

        assert!(errors.field_errors().contains_key("url"));
    }

    #[test]
    fn test_null_url_counts_as_missing() {
        let request: ShortenRequest = serde_json::from_str(r#"{"url": null}"#).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_empty_url_fails_validation() {
        let request: ShortenRequest = serde_json::from_str(r#"{"url": ""}"#).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_present_url_passes_validation() {
        let request: ShortenRequest =
            serde_json::from_str(r#"{"url": "https://example.com"}"#).unwrap();
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_non_string_url_is_rejected_by_serde() {
        assert!(serde_json::from_str::<ShortenRequest>(r#"{"url": 42}"#).is_err());
    }
}
