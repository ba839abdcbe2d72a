//! Panic-to-response conversion for `tower_http::catch_panic`.
//!
//! # Example
//!
//! ```ignore
//! use tower_http::catch_panic::CatchPanicLayer;
//!
//! let app = roic_routes().layer(CatchPanicLayer::custom(panic_response));
//! ```

use std::any::Any;

use axum::response::{IntoResponse, Response};

use crate::adapters::http::roic::RoicApiError;

/// Builds the unexpected-failure response from a panic payload.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "request handler panicked".to_string()
    };

    RoicApiError::Internal(detail).into_response()
}
