//! HTTP DTOs for ROIC endpoints.
//!
//! The domain result is already shaped for the wire, so it is re-exported
//! directly as the success body.

pub use crate::domain::valuation::RoicResult;

use serde::Serialize;

/// Prefix attached to the detail of any failure that is not the caller's.
pub const UNEXPECTED_ERROR_PREFIX: &str = "An unexpected error occurred: ";

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Error body: `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    /// Client-attributable failure, message passed through verbatim.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }

    pub fn unexpected(detail: impl AsRef<str>) -> Self {
        Self {
            error: format!("{}{}", UNEXPECTED_ERROR_PREFIX, detail.as_ref()),
        }
    }
}

/// Liveness probe body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self { status: "ok" }
    }
}
