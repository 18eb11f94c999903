//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`                   - Health check
//! - `GET  /health`             - Health check (alias)
//! - `GET  /{code}`             - Short link redirect
//! - `POST /api/shorten`        - Create a short link
//! - `GET  /api/stats/{code}`   - Link statistics
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the routed application with state and tracing attached.
///
/// Static routes take precedence over `/{code}`, so `/health` never reaches
/// the redirect handler.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health_handler))
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .nest("/api", api::routes::api_routes())
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the served application: [`router`] behind trailing-slash trimming.
///
/// Normalization must wrap the router; layers inside it run after routing.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
