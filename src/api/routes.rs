//! HTTP API route definitions.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers::{health, info, welcome, AppState};

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoint for load-balancer probes
        .route("/health", get(health))
        // Root endpoint
        .route("/", get(welcome))
        // Info endpoint
        .route("/api/info", get(info))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap();
        (status, json)
    }

    #[tokio::test]
    async fn health_endpoint_returns_healthy() {
        let app = create_router(AppState::default());

        let (status, body) = get_json(app, "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert!(!body["version"].as_str().unwrap().is_empty());
        assert!(chrono::DateTime::parse_from_rfc3339(body["timestamp"].as_str().unwrap()).is_ok());
    }

    #[tokio::test]
    async fn root_endpoint_returns_welcome_message() {
        let app = create_router(AppState::default());

        let (status, body) = get_json(app, "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["message"].as_str().unwrap().contains("CI/CD Pipeline"));
        assert_eq!(body["environment"], "development");
        assert!(chrono::DateTime::parse_from_rfc3339(body["timestamp"].as_str().unwrap()).is_ok());
    }

    #[tokio::test]
    async fn info_endpoint_returns_app_identity() {
        let app = create_router(AppState::default());

        let (status, body) = get_json(app, "/api/info").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["app"], "cicd-pipeline-app");
        assert!(!body["version"].as_str().unwrap().is_empty());
        assert!(body["runtimeVersion"].is_string());
        assert_eq!(body["environment"], "development");
        assert!(body["uptimeSeconds"].as_f64().unwrap() >= 0.0);
    }

    #[tokio::test]
    async fn responses_are_json() {
        let app = create_router(AppState::default());

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let content_type = response
            .headers()
            .get(axum::http::header::CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(content_type.starts_with("application/json"));
    }

    #[tokio::test]
    async fn unmatched_route_returns_404() {
        let app = create_router(AppState::default());

        let response = app
            .oneshot(Request::builder().uri("/missing").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
