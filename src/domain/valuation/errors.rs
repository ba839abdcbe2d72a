//! Valuation-specific error types.
//!
//! Errors raised while turning a submitted payload into a
//! [`FinancialProjection`](super::FinancialProjection).
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | TypeMismatch | 400 |
//! | Validation | 400 |

use thiserror::Error;

/// A named domain rule of a financial projection.
///
/// Rules are listed in the order they are checked. The display text is the
/// message returned to the caller verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ProjectionRule {
    #[error("Revenue projections must cover 5 years")]
    RevenueHorizon,

    #[error("COGS projections must cover 5 years")]
    CogsHorizon,

    #[error("OPEX projections must cover 5 years")]
    OpexHorizon,

    #[error("Tax rate must be between 0 and 1")]
    TaxRateRange,

    #[error("NWC change projections must cover 5 years")]
    NwcChangesHorizon,

    #[error("CAPEX projections must cover 5 years")]
    CapexHorizon,

    #[error("Discount rate must be greater than 0")]
    DiscountRatePositive,
}

impl ProjectionRule {
    /// Name of the payload field the rule constrains.
    pub fn field(&self) -> &'static str {
        match self {
            ProjectionRule::RevenueHorizon => "revenue",
            ProjectionRule::CogsHorizon => "cogs",
            ProjectionRule::OpexHorizon => "opex",
            ProjectionRule::TaxRateRange => "tax_rate",
            ProjectionRule::NwcChangesHorizon => "nwc_changes",
            ProjectionRule::CapexHorizon => "capex",
            ProjectionRule::DiscountRatePositive => "discount_rate",
        }
    }
}

/// Errors that prevent a projection from reaching the ROIC engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectionError {
    /// The payload could not be bound to the projection schema.
    #[error("Invalid projection payload: {0}")]
    TypeMismatch(String),

    /// A domain invariant was violated. Only the first violation is reported.
    #[error(transparent)]
    Validation(#[from] ProjectionRule),
}

impl ProjectionError {
    pub fn type_mismatch(reason: impl Into<String>) -> Self {
        ProjectionError::TypeMismatch(reason.into())
    }

    /// Returns the violated rule, if this is a validation failure.
    pub fn rule(&self) -> Option<ProjectionRule> {
        match self {
            ProjectionError::Validation(rule) => Some(*rule),
            ProjectionError::TypeMismatch(_) => None,
        }
    }
}
