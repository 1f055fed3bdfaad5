//! Cost calculation from token counts and tier rates

use crate::tier::ModelTier;
use serde::Serialize;

/// Decimal places kept on currency amounts
const COST_SCALE: f64 = 100_000.0; // 5 decimal places

/// A cost breakdown for one (estimated or actual) request
///
/// Serialized camelCase to match the wire format consumed by clients.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CostEstimate {
    pub input_cost: f64,
    pub output_cost: f64,
    pub total_cost: f64,
    pub input_tokens: u32,
    pub output_tokens: u32,
    pub total_tokens: u32,
}

impl CostEstimate {
    /// Price the given token counts at the tier's rates
    ///
    /// `input_cost` and `output_cost` are each rounded to 5 decimal places;
    /// `total_cost` is their exact sum, so the identity
    /// `total_cost == input_cost + output_cost` holds structurally.
    /// Deterministic, no side effects.
    pub fn calculate(input_tokens: u32, output_tokens: u32, tier: ModelTier) -> Self {
        let rates = tier.rates();

        let input_cost = round5(f64::from(input_tokens) / 1000.0 * rates.input_per_1k);
        let output_cost = round5(f64::from(output_tokens) / 1000.0 * rates.output_per_1k);

        Self {
            input_cost,
            output_cost,
            total_cost: input_cost + output_cost,
            input_tokens,
            output_tokens,
            total_tokens: input_tokens + output_tokens,
        }
    }
}

/// Round to 5 decimal places, half away from zero on the scaled value
fn round5(amount: f64) -> f64 {
    (amount * COST_SCALE).round() / COST_SCALE
}

/// Render a cost for display, e.g. `$0.0015`
pub fn format_cost(cost: f64) -> String {
    format!("${:.4}", cost)
}
