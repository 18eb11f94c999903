mod common;

use axum::http::{StatusCode, header};

#[tokio::test]
async fn test_redirect_success() {
    let server = common::create_test_server();
    let code = common::shorten(&server, "https://example.com").await;

    let response = server.get(&format!("/{code}")).await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header(header::LOCATION), "https://example.com");
}

#[tokio::test]
async fn test_redirect_location_is_verbatim() {
    let server = common::create_test_server();
    let url = "HTTPS://Example.COM:443/Some/Path?q=1&b=%20#frag";
    let code = common::shorten(&server, url).await;

    let response = server.get(&format!("/{code}")).await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header(header::LOCATION), url);
}

#[tokio::test]
async fn test_redirect_not_found() {
    let server = common::create_test_server();

    let response = server.get("/invalid123").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["details"]["code"], "invalid123");
}

#[tokio::test]
async fn test_redirect_counts_each_click() {
    let server = common::create_test_server();
    let code = common::shorten(&server, "https://example.com").await;

    server.get(&format!("/{code}")).await;
    server.get(&format!("/{code}")).await;

    let stats = server
        .get(&format!("/api/stats/{code}"))
        .await
        .json::<serde_json::Value>();
    assert_eq!(stats["clicks"], 2);
}

#[tokio::test]
async fn test_redirect_unknown_code_does_not_create_link() {
    let server = common::create_test_server();

    server.get("/invalid123").await.assert_status_not_found();

    server
        .get("/api/stats/invalid123")
        .await
        .assert_status_not_found();
}
