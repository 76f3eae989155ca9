//! HTTP route handlers.
//!
//! Only two routes exist. Anything else falls through to axum's default
//! 404 / 405 handling. Request tracing is enabled via middleware that
//! generates a unique request ID for each incoming request.

pub mod health;
pub mod home;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_HEALTH;
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Creates the Axum router for the given state.
pub fn create_router(state: AppState) -> Router {
    // Health check - no caching, always fresh for liveness probes
    let health_routes = Router::new()
        .route("/health", get(health::health))
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HEALTH),
        ));

    let home_routes = Router::new().route("/", get(home::index));

    Router::new()
        .merge(health_routes)
        .merge(home_routes)
        .with_state(state)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Variant;
    use crate::config::AppConfig;
    use crate::middleware::REQUEST_ID_HEADER;
    use axum::body::{to_bytes, Body};
    use http::{Method, Request, StatusCode};
    use tower::ServiceExt;

    fn router(variant: Variant, config: AppConfig) -> Router {
        create_router(AppState::with_hostname(variant, config, "test-host"))
    }

    async fn get_body(app: Router, uri: &str) -> (StatusCode, http::HeaderMap, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn health_returns_json_ok() {
        let (status, headers, body) =
            get_body(router(Variant::Pipeline, AppConfig::default()), "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert!(headers[http::header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("application/json"));
        assert_eq!(headers[CACHE_CONTROL], CACHE_CONTROL_HEALTH);
        let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed["status"], "ok");
        assert_eq!(parsed["service"], "cat2-pipeline-app");
    }

    #[tokio::test]
    async fn blue_green_health_uses_defaults() {
        let (status, _, body) =
            get_body(router(Variant::BlueGreen, AppConfig::default()), "/health").await;

        assert_eq!(status, StatusCode::OK);
        let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(
            parsed,
            serde_json::json!({"status": "ok", "color": "unknown", "version": "v1"})
        );
    }

    #[tokio::test]
    async fn home_returns_plain_text() {
        let (status, headers, body) =
            get_body(router(Variant::BlueGreen, AppConfig::default()), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(headers[http::header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/plain"));
        assert!(body.contains("running on test-host"));
    }

    #[tokio::test]
    async fn unknown_path_is_not_found() {
        let (status, _, _) =
            get_body(router(Variant::Pipeline, AppConfig::default()), "/missing").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn wrong_method_is_rejected() {
        let response = router(Variant::Pipeline, AppConfig::default())
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn every_response_carries_request_id() {
        let (_, headers, _) =
            get_body(router(Variant::Pipeline, AppConfig::default()), "/missing").await;
        let id = headers[REQUEST_ID_HEADER].to_str().unwrap();
        assert!(uuid::Uuid::parse_str(id).is_ok());
    }
}
