//! ROIC Calculator - Discounted return on invested capital.

use serde::Serialize;

use super::formulas::{
    apply_salvage_value, calculate_pv, invested_capital_for_year, nopat_for_year,
};
use super::projection::{FinancialProjection, YearlySeries};

/// Every intermediate series the ROIC ratio is derived from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoicBreakdown {
    pub nopat: YearlySeries,
    /// NOPAT with the salvage value added to the final year.
    pub adjusted_nopat: YearlySeries,
    pub invested_capital: YearlySeries,
    pub pv_nopat: YearlySeries,
    pub pv_invested_capital: YearlySeries,
    pub total_pv_nopat: f64,
    pub total_pv_invested_capital: f64,
    pub roic: f64,
}

/// Outcome returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoicResult {
    pub company_name: String,
    /// Non-finite when discounted invested capital sums to zero; serializes
    /// as `null` in that case.
    pub roic: f64,
}

/// Calculator for discounted ROIC over the projection horizon.
pub struct RoicCalculator;

impl RoicCalculator {
    /// Runs the full pipeline and keeps every intermediate step.
    ///
    /// 1. NOPAT and invested capital per year
    /// 2. Salvage value added to the final NOPAT
    /// 3. Both series discounted to year 0
    /// 4. Ratio of the discounted sums
    ///
    /// # Edge Cases
    /// - Discounted invested capital summing to zero yields `±inf` or `NaN`
    pub fn breakdown(projection: &FinancialProjection) -> RoicBreakdown {
        let nopat: YearlySeries = std::array::from_fn(|year| nopat_for_year(projection, year));
        let invested_capital: YearlySeries =
            std::array::from_fn(|year| invested_capital_for_year(projection, year));

        let adjusted_nopat = apply_salvage_value(&nopat, projection.salvage_value());

        let pv_nopat = calculate_pv(&adjusted_nopat, projection.discount_rate());
        let pv_invested_capital = calculate_pv(&invested_capital, projection.discount_rate());

        let total_pv_nopat: f64 = pv_nopat.iter().sum();
        let total_pv_invested_capital: f64 = pv_invested_capital.iter().sum();

        RoicBreakdown {
            nopat,
            adjusted_nopat,
            invested_capital,
            pv_nopat,
            pv_invested_capital,
            total_pv_nopat,
            total_pv_invested_capital,
            roic: total_pv_nopat / total_pv_invested_capital,
        }
    }

    /// Computes ROIC for a validated projection.
    pub fn calculate(projection: &FinancialProjection) -> RoicResult {
        RoicResult {
            company_name: projection.company_name().to_string(),
            roic: Self::breakdown(projection).roic,
        }
    }
}
