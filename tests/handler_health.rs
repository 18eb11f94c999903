mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use url_shortener::api::handlers::health_handler;

#[tokio::test]
async fn test_health_endpoint_success() {
    let server = common::create_test_server();

    let response = server.get("/").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["storage"]["status"], "ok");
}

#[tokio::test]
async fn test_health_alias() {
    let server = common::create_test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["status"], "healthy");
}

#[tokio::test]
async fn test_health_endpoint_structure() {
    let app = Router::new()
        .route("/", get(health_handler))
        .with_state(common::create_test_state());

    let server = TestServer::new(app).unwrap();

    let json = server.get("/").await.json::<serde_json::Value>();

    assert!(json.get("status").is_some());
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json["checks"].get("storage").is_some());
    assert_eq!(json["checks"]["storage"]["message"], "memory store");
}

mod degraded {
    use super::*;
    use async_trait::async_trait;
    use axum::http::StatusCode;
    use serde_json::json;
    use std::sync::Arc;
    use url_shortener::domain::entities::{Link, NewLink};
    use url_shortener::domain::repositories::LinkRepository;
    use url_shortener::error::AppError;
    use url_shortener::state::AppState;

    /// Store whose every call fails, standing in for an unreachable database.
    struct UnreachableRepository;

    fn down() -> AppError {
        AppError::internal("Database error", json!({ "reason": "connection refused" }))
    }

    #[async_trait]
    impl LinkRepository for UnreachableRepository {
        async fn create(&self, _new_link: NewLink) -> Result<Link, AppError> {
            Err(down())
        }

        async fn find_by_code(&self, _code: &str) -> Result<Option<Link>, AppError> {
            Err(down())
        }

        async fn record_click(&self, _code: &str) -> Result<Option<Link>, AppError> {
            Err(down())
        }

        async fn list(&self, _limit: i64) -> Result<Vec<Link>, AppError> {
            Err(down())
        }

        async fn count(&self) -> Result<i64, AppError> {
            Err(down())
        }

        async fn health_check(&self) -> Result<(), AppError> {
            Err(down())
        }

        fn backend_name(&self) -> &'static str {
            "postgres"
        }
    }

    fn unreachable_server() -> TestServer {
        let state = AppState::new(Arc::new(UnreachableRepository), None);
        TestServer::new(url_shortener::routes::router(state)).unwrap()
    }

    #[tokio::test]
    async fn test_health_reports_degraded_storage() {
        let server = unreachable_server();

        let response = server.get("/").await;

        response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

        let json = response.json::<serde_json::Value>();
        assert_eq!(json["status"], "degraded");
        assert_eq!(json["checks"]["storage"]["status"], "error");
    }

    #[tokio::test]
    async fn test_store_failure_is_internal_error() {
        let server = unreachable_server();

        let response = server
            .post("/api/shorten")
            .json(&json!({ "url": "https://example.com" }))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.json::<serde_json::Value>()["error"]["code"],
            "internal_error"
        );
    }
}
