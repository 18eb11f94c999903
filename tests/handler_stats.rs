mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use chrono::NaiveDateTime;
use std::sync::Arc;
use url_shortener::api::handlers::stats_handler;
use url_shortener::domain::entities::NewLink;
use url_shortener::domain::repositories::LinkRepository;
use url_shortener::infrastructure::memory::InMemoryLinkRepository;
use url_shortener::state::AppState;

#[tokio::test]
async fn test_stats_fresh_link_has_zero_clicks() {
    let server = common::create_test_server();
    let code = common::shorten(&server, "https://example.com").await;

    let response = server.get(&format!("/api/stats/{code}")).await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["url"], "https://example.com");
    assert_eq!(json["clicks"], 0);
}

#[tokio::test]
async fn test_stats_after_click() {
    let server = common::create_test_server();
    let code = common::shorten(&server, "https://example.com").await;

    server.get(&format!("/{code}")).await;

    let response = server.get(&format!("/api/stats/{code}")).await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["clicks"], 1);
    assert_eq!(json["url"], "https://example.com");
}

#[tokio::test]
async fn test_stats_created_at_format() {
    let server = common::create_test_server();
    let code = common::shorten(&server, "https://example.com").await;

    let json = server
        .get(&format!("/api/stats/{code}"))
        .await
        .json::<serde_json::Value>();

    let created_at = json["created_at"].as_str().unwrap();
    assert!(NaiveDateTime::parse_from_str(created_at, "%Y-%m-%dT%H:%M:%S").is_ok());
}

#[tokio::test]
async fn test_stats_does_not_count_as_click() {
    let server = common::create_test_server();
    let code = common::shorten(&server, "https://example.com").await;

    for _ in 0..3 {
        server.get(&format!("/api/stats/{code}")).await.assert_status_ok();
    }

    let json = server
        .get(&format!("/api/stats/{code}"))
        .await
        .json::<serde_json::Value>();
    assert_eq!(json["clicks"], 0);
}

#[tokio::test]
async fn test_stats_exact_shape() {
    let repo = Arc::new(InMemoryLinkRepository::new());
    let link = repo
        .create(NewLink {
            code: "abc123".to_string(),
            long_url: "https://example.com".to_string(),
        })
        .await
        .unwrap();

    let app = Router::new()
        .route("/api/stats/{code}", get(stats_handler))
        .with_state(AppState::new(repo, None));
    let server = TestServer::new(app).unwrap();

    let json = server
        .get("/api/stats/abc123")
        .await
        .json::<serde_json::Value>();

    assert_eq!(
        json,
        serde_json::json!({
            "url": "https://example.com",
            "clicks": 0,
            "created_at": link.created_at_formatted(),
        })
    );
}

#[tokio::test]
async fn test_stats_not_found() {
    let server = common::create_test_server();

    let response = server.get("/api/stats/invalid123").await;

    response.assert_status_not_found();
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "not_found"
    );
}
