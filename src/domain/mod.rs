//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `valuation` - Financial projection validation and the discounted ROIC engine

pub mod valuation;
