//! HTTP handlers for ROIC endpoints.
//!
//! These handlers connect Axum routes to the application layer command handler.

use axum::extract::rejection::JsonRejection;
use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::Value;
use tracing::{error, warn};

use crate::application::handlers::valuation::{CalculateRoicCommand, CalculateRoicHandler};
use crate::domain::valuation::ProjectionError;

use super::dto::{ErrorResponse, HealthResponse, RoicResult};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// ROIC API error that implements IntoResponse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoicApiError {
    /// Binding or validation failure; message is returned verbatim.
    BadRequest(String),
    /// Body exceeded the configured size limit.
    PayloadTooLarge(String),
    /// Anything else; reported with the generic prefix.
    Internal(String),
}

impl IntoResponse for RoicApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match self {
            RoicApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorResponse::rejected(msg)),
            RoicApiError::PayloadTooLarge(msg) => {
                (StatusCode::PAYLOAD_TOO_LARGE, ErrorResponse::rejected(msg))
            }
            RoicApiError::Internal(detail) => {
                error!(detail = %detail, "Unexpected error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::unexpected(detail),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}

impl From<ProjectionError> for RoicApiError {
    fn from(error: ProjectionError) -> Self {
        RoicApiError::BadRequest(error.to_string())
    }
}

impl From<JsonRejection> for RoicApiError {
    fn from(rejection: JsonRejection) -> Self {
        let message = rejection.body_text();
        warn!(status = %rejection.status(), error = %message, "Unreadable projection body");

        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            RoicApiError::PayloadTooLarge(message)
        } else {
            RoicApiError::BadRequest(ProjectionError::type_mismatch(message).to_string())
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /roic
///
/// Computes ROIC for the five-year projection in the request body.
pub async fn calculate_roic(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<RoicResult>, RoicApiError> {
    let Json(payload) = payload?;

    let handler = CalculateRoicHandler::new();
    let result = handler.handle(CalculateRoicCommand { payload })?;

    Ok(Json(result))
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
