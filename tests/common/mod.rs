#![allow(dead_code)]

use axum_test::TestServer;
use serde_json::{Value, json};
use std::sync::Arc;
use url_shortener::infrastructure::memory::InMemoryLinkRepository;
use url_shortener::routes::router;
use url_shortener::state::AppState;

pub fn create_test_state() -> AppState {
    AppState::new(Arc::new(InMemoryLinkRepository::new()), None)
}

pub fn create_test_state_with_base_url(base_url: &str) -> AppState {
    AppState::new(
        Arc::new(InMemoryLinkRepository::new()),
        Some(base_url.to_string()),
    )
}

/// Full application router over a fresh in-memory store.
pub fn create_test_server() -> TestServer {
    TestServer::new(router(create_test_state())).unwrap()
}

/// Shortens `url` and returns the generated short code.
pub async fn shorten(server: &TestServer, url: &str) -> String {
    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": url }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    response.json::<Value>()["short_code"]
        .as_str()
        .unwrap()
        .to_string()
}
