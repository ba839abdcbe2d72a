//! Valuation domain module.
//!
//! Pure computation of discounted Return on Invested Capital over a
//! five-year projection.
//!
//! # Module Structure
//!
//! - `projection` - FinancialProjection binding and validation
//! - `formulas` - EBIT, NOPAT, invested capital and present value
//! - `calculator` - RoicCalculator aggregation into the final ratio
//! - `errors` - ProjectionError and the ordered ProjectionRule set
//!
//! Nothing here performs I/O or holds state, so every function may be
//! called concurrently without coordination.

mod calculator;
mod errors;
mod formulas;
mod projection;

pub use calculator::{RoicBreakdown, RoicCalculator, RoicResult};
pub use errors::{ProjectionError, ProjectionRule};
pub use formulas::{
    apply_salvage_value, calculate_ebit, calculate_nopat, calculate_pv,
    invested_capital_for_year, nopat_for_year,
};
pub use projection::{FinancialProjection, ProjectionInput, YearlySeries, HORIZON_YEARS};
