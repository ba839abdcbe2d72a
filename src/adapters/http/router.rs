//! Application router with the shared middleware stack.

use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use axum::http::{header, Method};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::{ServerConfig, ValidationError};

use super::middleware::panic_response;
use super::roic::roic_routes;

/// Builds the full HTTP application from server configuration.
///
/// Layers, innermost first: body limit, panic catching, request timeout,
/// CORS (only when origins are configured), tracing.
///
/// # Errors
///
/// Returns `ValidationError::InvalidCorsOrigin` if a configured origin is not
/// a valid header value.
pub fn build_router(config: &ServerConfig) -> Result<Router, ValidationError> {
    let mut router = roic_routes()
        .layer(DefaultBodyLimit::max(config.body_limit_bytes))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.request_timeout_secs,
        )));

    let origins = config.cors_origin_values()?;
    if !origins.is_empty() {
        router = router.layer(
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE]),
        );
    }

    Ok(router.layer(TraceLayer::new_for_http()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn default_config_serves_health() {
        let app = build_router(&ServerConfig::default()).unwrap();
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn oversized_body_is_rejected() {
        let config = ServerConfig {
            body_limit_bytes: 16,
            ..Default::default()
        };
        let app = build_router(&config).unwrap();
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/roic")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(format!("{{\"company_name\": \"{}\"}}", "x".repeat(64))))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn configured_origin_receives_cors_headers() {
        let config = ServerConfig {
            cors_origins: Some("http://localhost:5173".to_string()),
            ..Default::default()
        };
        let app = build_router(&config).unwrap();
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header(header::ORIGIN, "http://localhost:5173")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "http://localhost:5173"
        );
    }

    #[test]
    fn invalid_origin_fails_to_build() {
        let config = ServerConfig {
            cors_origins: Some("http://bad\norigin".to_string()),
            ..Default::default()
        };
        assert!(build_router(&config).is_err());
    }
}
