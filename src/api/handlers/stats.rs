//! Handler for link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves statistics for a short link.
///
/// # Endpoint
///
/// `GET /api/stats/{code}`
///
/// # Response
///
/// ```json
/// {
///   "url": "https://example.com",
///   "clicks": 2,
///   "created_at": "2024-03-09T07:05:01"
/// }
/// ```
///
/// Reading statistics does not count as a click.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let link = state.link_service.get_stats(&code).await?;

    Ok(Json(link.into()))
}
