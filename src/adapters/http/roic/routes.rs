//! HTTP routes for ROIC endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{calculate_roic, health};

/// Creates the ROIC router.
///
/// # Routes
/// - `POST /roic` - Compute ROIC for a projection
/// - `GET /health` - Liveness probe
pub fn roic_routes() -> Router {
    Router::new()
        .route("/roic", post(calculate_roic))
        .route("/health", get(health))
}
