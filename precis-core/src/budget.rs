//! Per-request cost ceiling enforcement
//!
//! The same ceiling gates a request twice: once on the pre-call estimate
//! (blocking the provider call entirely) and once on the actual cost
//! computed from the provider's usage report (a safety net - spend has
//! already occurred when it fires). Both checks use strict greater-than;
//! a cost exactly equal to the ceiling is accepted.

use crate::cost::CostEstimate;
use crate::error::SummarizeError;

/// Default maximum allowed cost per request, in currency units
pub const DEFAULT_MAX_COST: f64 = 0.05;

/// The configured maximum allowed monetary cost for one request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostCeiling(f64);

impl CostCeiling {
    pub fn new(amount: f64) -> Self {
        Self(amount)
    }

    /// The ceiling amount in currency units
    pub fn amount(&self) -> f64 {
        self.0
    }

    /// Pre-call check against the estimated cost
    ///
    /// On failure the provider must not be called.
    pub fn check_estimated(&self, estimate: &CostEstimate) -> Result<(), SummarizeError> {
        if estimate.total_cost > self.0 {
            return Err(SummarizeError::EstimatedCostExceeded {
                estimated: estimate.total_cost,
                ceiling: self.0,
            });
        }
        Ok(())
    }

    /// Post-call check against the cost of the provider's reported usage
    ///
    /// A failure here means the spend already happened; the error exists so
    /// the caller never returns a result that violated the ceiling.
    pub fn check_actual(&self, actual_cost: f64) -> Result<(), SummarizeError> {
        if actual_cost > self.0 {
            return Err(SummarizeError::ActualCostExceeded {
                actual: actual_cost,
                ceiling: self.0,
            });
        }
        Ok(())
    }
}

impl Default for CostCeiling {
    fn default() -> Self {
        Self(DEFAULT_MAX_COST)
    }
}
