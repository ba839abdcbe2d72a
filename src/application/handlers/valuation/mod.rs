//! Valuation handlers.
//!
//! ## Commands
//! - Calculating ROIC for a submitted five-year projection

mod calculate_roic;

pub use calculate_roic::{CalculateRoicCommand, CalculateRoicHandler};
