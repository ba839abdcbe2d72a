//! CalculateRoicHandler - Command handler for ROIC calculation.

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::domain::valuation::{FinancialProjection, ProjectionError, RoicCalculator, RoicResult};

/// Command carrying a raw projection payload as received at the boundary.
#[derive(Debug, Clone)]
pub struct CalculateRoicCommand {
    pub payload: Value,
}

/// Handler for calculating ROIC.
///
/// Binds and validates the payload, then runs the engine. Stateless, so a
/// single instance can serve every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct CalculateRoicHandler;

impl CalculateRoicHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, command: CalculateRoicCommand) -> Result<RoicResult, ProjectionError> {
        info!(payload = %command.payload, "Received projection");

        let projection = FinancialProjection::from_value(command.payload)
            .inspect_err(|e| warn!(error = %e, "Projection rejected"))?;

        let breakdown = RoicCalculator::breakdown(&projection);
        debug!(
            total_pv_nopat = breakdown.total_pv_nopat,
            total_pv_invested_capital = breakdown.total_pv_invested_capital,
            "Discounted totals"
        );
        info!(
            roic = breakdown.roic,
            company_name = projection.company_name(),
            "Calculated ROIC"
        );

        Ok(RoicResult {
            company_name: projection.company_name().to_string(),
            roic: breakdown.roic,
        })
    }
}
