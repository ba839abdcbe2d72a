//! Per-year valuation formulas.
//!
//! All functions are pure and operate in `f64` without rounding.

use super::projection::{FinancialProjection, YearlySeries, HORIZON_YEARS};

/// Earnings before interest and taxes.
pub fn calculate_ebit(revenue: f64, cogs: f64, opex: f64) -> f64 {
    revenue - cogs - opex
}

/// Net operating profit after tax.
pub fn calculate_nopat(ebit: f64, tax_rate: f64) -> f64 {
    ebit * (1.0 - tax_rate)
}

/// NOPAT of a single projected year, before any terminal adjustment.
///
/// # Panics
///
/// Panics if `year >= HORIZON_YEARS`.
pub fn nopat_for_year(projection: &FinancialProjection, year: usize) -> f64 {
    let ebit = calculate_ebit(
        projection.revenue()[year],
        projection.cogs()[year],
        projection.opex()[year],
    );
    calculate_nopat(ebit, projection.tax_rate())
}

/// Change in invested capital for a single projected year.
///
/// # Panics
///
/// Panics if `year >= HORIZON_YEARS`.
pub fn invested_capital_for_year(projection: &FinancialProjection, year: usize) -> f64 {
    projection.capex()[year] - projection.nwc_changes()[year]
}

/// Returns a copy of `nopat` with `salvage_value` added to the final year.
pub fn apply_salvage_value(nopat: &YearlySeries, salvage_value: f64) -> YearlySeries {
    std::array::from_fn(|year| {
        if year == HORIZON_YEARS - 1 {
            nopat[year] + salvage_value
        } else {
            nopat[year]
        }
    })
}

/// Discounts each value to year 0.
///
/// `pv[i] = values[i] / (1 + discount_rate)^i`, so index 0 is returned
/// unchanged: year 0 is the valuation date.
pub fn calculate_pv<const N: usize>(values: &[f64; N], discount_rate: f64) -> [f64; N] {
    let growth = 1.0 + discount_rate;
    std::array::from_fn(|year| values[year] / growth.powi(year as i32))
}
