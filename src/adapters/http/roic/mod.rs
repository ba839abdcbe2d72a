//! ROIC HTTP adapter module.
//!
//! Provides the REST endpoint for ROIC calculation.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{ErrorResponse, HealthResponse};
pub use handlers::RoicApiError;
pub use routes::roic_routes;
