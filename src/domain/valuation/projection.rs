//! Financial projection input and its validation.
//!
//! A payload goes through two steps before it reaches the engine:
//!
//! 1. **Binding** - the loosely-typed record is bound to [`ProjectionInput`]
//!    against a fixed schema. Missing, unknown or mistyped fields fail with
//!    [`ProjectionError::TypeMismatch`].
//! 2. **Validation** - [`FinancialProjection::try_from_input`] checks the
//!    domain rules in a fixed order and reports the first one violated.

use serde::Deserialize;
use serde_json::Value;

use super::errors::{ProjectionError, ProjectionRule};

/// Number of yearly periods every projection must cover.
pub const HORIZON_YEARS: usize = 5;

/// One value per projected year, index 0 being the valuation year.
pub type YearlySeries = [f64; HORIZON_YEARS];

/// A payload bound to the projection schema but not yet validated.
///
/// Sequences are kept as vectors here so that a wrong horizon is reported
/// as a rule violation rather than a binding failure.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectionInput {
    pub company_name: String,
    pub revenue: Vec<f64>,
    pub cogs: Vec<f64>,
    pub opex: Vec<f64>,
    pub tax_rate: f64,
    pub nwc_changes: Vec<f64>,
    pub capex: Vec<f64>,
    pub salvage_value: f64,
    pub discount_rate: f64,
}

impl ProjectionInput {
    /// Binds a raw JSON record to the projection schema.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectionError::TypeMismatch`] with serde's diagnostic when
    /// the record is not an object, a field is missing or unknown, or a value
    /// has the wrong type.
    pub fn bind(value: Value) -> Result<Self, ProjectionError> {
        serde_json::from_value(value).map_err(|e| ProjectionError::type_mismatch(e.to_string()))
    }
}

/// A validated five-year financial projection.
///
/// Construct through [`FinancialProjection::try_from_input`] or
/// [`FinancialProjection::from_value`]; fields are read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct FinancialProjection {
    company_name: String,
    revenue: YearlySeries,
    cogs: YearlySeries,
    opex: YearlySeries,
    tax_rate: f64,
    nwc_changes: YearlySeries,
    capex: YearlySeries,
    salvage_value: f64,
    discount_rate: f64,
}

impl FinancialProjection {
    /// Validates a bound payload.
    ///
    /// Rules are checked in this order and the first failure wins:
    /// revenue, cogs, opex horizons, tax rate range, nwc_changes and capex
    /// horizons, discount rate positivity.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectionError::Validation`] naming the violated rule.
    pub fn try_from_input(input: ProjectionInput) -> Result<Self, ProjectionError> {
        let revenue = horizon(input.revenue, ProjectionRule::RevenueHorizon)?;
        let cogs = horizon(input.cogs, ProjectionRule::CogsHorizon)?;
        let opex = horizon(input.opex, ProjectionRule::OpexHorizon)?;

        // NaN fails the range check
        if !(0.0..=1.0).contains(&input.tax_rate) {
            return Err(ProjectionRule::TaxRateRange.into());
        }

        let nwc_changes = horizon(input.nwc_changes, ProjectionRule::NwcChangesHorizon)?;
        let capex = horizon(input.capex, ProjectionRule::CapexHorizon)?;

        if input.discount_rate.is_nan() || input.discount_rate <= 0.0 {
            return Err(ProjectionRule::DiscountRatePositive.into());
        }

        Ok(Self {
            company_name: input.company_name,
            revenue,
            cogs,
            opex,
            tax_rate: input.tax_rate,
            nwc_changes,
            capex,
            salvage_value: input.salvage_value,
            discount_rate: input.discount_rate,
        })
    }

    /// Binds and validates a raw JSON record in one step.
    pub fn from_value(value: Value) -> Result<Self, ProjectionError> {
        Self::try_from_input(ProjectionInput::bind(value)?)
    }

    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    pub fn revenue(&self) -> &YearlySeries {
        &self.revenue
    }

    pub fn cogs(&self) -> &YearlySeries {
        &self.cogs
    }

    pub fn opex(&self) -> &YearlySeries {
        &self.opex
    }

    pub fn tax_rate(&self) -> f64 {
        self.tax_rate
    }

    pub fn nwc_changes(&self) -> &YearlySeries {
        &self.nwc_changes
    }

    pub fn capex(&self) -> &YearlySeries {
        &self.capex
    }

    pub fn salvage_value(&self) -> f64 {
        self.salvage_value
    }

    pub fn discount_rate(&self) -> f64 {
        self.discount_rate
    }
}

fn horizon(values: Vec<f64>, rule: ProjectionRule) -> Result<YearlySeries, ProjectionError> {
    values.try_into().map_err(|_| ProjectionError::Validation(rule))
}
