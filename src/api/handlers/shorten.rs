//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode, Uri},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::base_url::{build_short_url, resolve_base_url};

/// Creates a short link for a long URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "short_code": "q3Xk9_aZ",
///   "short_url": "http://localhost:3000/q3Xk9_aZ"
/// }
/// ```
///
/// Submitting the same URL again creates another, independent short link.
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not a JSON object, or if `url` is
/// missing, empty or not an absolute URL with a host.
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let long_url = payload
        .url
        .ok_or_else(|| AppError::bad_request("URL is required", json!({ "field": "url" })))?;

    let link = state.link_service.create_short_link(long_url).await?;

    let base_url = resolve_base_url(state.base_url.as_deref(), &headers, &uri);
    let short_url = build_short_url(&base_url, &link.code);

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            short_code: link.code,
            short_url,
        }),
    ))
}
