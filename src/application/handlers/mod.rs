//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod valuation;

pub use valuation::{CalculateRoicCommand, CalculateRoicHandler};
