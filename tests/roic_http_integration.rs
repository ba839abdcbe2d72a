//! Integration tests for the ROIC HTTP endpoint.
//!
//! These tests drive the fully layered router the binary serves:
//! 1. Valid projections return the company name and ratio
//! 2. Rule violations return the rule message with 400
//! 3. Binding failures return a payload diagnostic with 400
//! 4. Degenerate capital returns a null ratio rather than an error

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use roic_calculator::adapters::http::build_router;
use roic_calculator::config::ServerConfig;
use roic_calculator::domain::valuation::{FinancialProjection, RoicCalculator};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn app() -> Router {
    build_router(&ServerConfig::default()).unwrap()
}

fn baseline() -> Value {
    json!({
        "company_name": "Umbrella Holdings",
        "revenue": [100, 100, 100, 100, 100],
        "cogs": [40, 40, 40, 40, 40],
        "opex": [20, 20, 20, 20, 20],
        "tax_rate": 0.3,
        "nwc_changes": [0, 0, 0, 0, 0],
        "capex": [10, 10, 10, 10, 10],
        "salvage_value": 0,
        "discount_rate": 0.1
    })
}

async fn post_roic(payload: &Value) -> (StatusCode, Value) {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/roic")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

// =============================================================================
// Success
// =============================================================================

#[tokio::test]
async fn baseline_projection_returns_ratio() {
    let (status, body) = post_roic(&baseline()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["company_name"], "Umbrella Holdings");
    assert!((body["roic"].as_f64().unwrap() - 2.8).abs() < 1e-9);
    assert_eq!(body.as_object().unwrap().len(), 2);
}

#[tokio::test]
async fn uneven_projection_matches_engine() {
    let payload = json!({
        "company_name": "Wayne Enterprises",
        "revenue": [500.5, 620.0, 710.25, 805.0, 900.0],
        "cogs": [210.0, 250.0, 280.0, 310.0, 345.0],
        "opex": [90.0, 95.0, 101.0, 108.0, 115.0],
        "tax_rate": 0.21,
        "nwc_changes": [15.0, -5.0, 12.0, 8.0, -20.0],
        "capex": [120.0, 80.0, 95.0, 60.0, 40.0],
        "salvage_value": 250.0,
        "discount_rate": 0.09
    });

    let (status, body) = post_roic(&payload).await;
    let expected = RoicCalculator::calculate(&FinancialProjection::from_value(payload).unwrap());

    assert_eq!(status, StatusCode::OK);
    assert!((body["roic"].as_f64().unwrap() - expected.roic).abs() < 1e-12);
}

#[tokio::test]
async fn zero_discounted_capital_returns_null_ratio() {
    let mut payload = baseline();
    payload["nwc_changes"] = json!([10, 10, 10, 10, 10]);

    let (status, body) = post_roic(&payload).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["roic"].is_null());
}

// =============================================================================
// Validation failures
// =============================================================================

#[tokio::test]
async fn short_revenue_is_client_error() {
    let mut payload = baseline();
    payload["revenue"] = json!([100, 100, 100, 100]);

    let (status, body) = post_roic(&payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Revenue projections must cover 5 years" }));
}

#[tokio::test]
async fn tax_rate_above_one_is_client_error() {
    let mut payload = baseline();
    payload["tax_rate"] = json!(1.5);

    let (status, body) = post_roic(&payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Tax rate must be between 0 and 1");
}

#[tokio::test]
async fn first_violated_rule_is_reported() {
    let mut payload = baseline();
    payload["opex"] = json!([20, 20]);
    payload["discount_rate"] = json!(-1);

    let (status, body) = post_roic(&payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "OPEX projections must cover 5 years");
}

// =============================================================================
// Binding failures
// =============================================================================

#[tokio::test]
async fn missing_field_is_client_error() {
    let mut payload = baseline();
    payload.as_object_mut().unwrap().remove("tax_rate");

    let (status, body) = post_roic(&payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error = body["error"].as_str().unwrap();
    assert!(error.starts_with("Invalid projection payload"));
    assert!(error.contains("tax_rate"));
}

#[tokio::test]
async fn string_number_is_client_error() {
    let mut payload = baseline();
    payload["discount_rate"] = json!("0.1");

    let (status, _) = post_roic(&payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn get_on_roic_is_not_allowed() {
    let response = app()
        .oneshot(Request::builder().uri("/roic").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
