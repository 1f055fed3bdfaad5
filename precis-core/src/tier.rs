//! Supported model tiers and their price rates
//!
//! The price table is an enumerated set of tiers rather than a string-keyed
//! map: each tier carries its two per-1K-token rates as data, and every
//! model name that reaches pricing resolves to exactly one tier.

use std::fmt;

/// Price per 1000 tokens for one model tier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRates {
    /// Price per 1000 input (prompt) tokens
    pub input_per_1k: f64,

    /// Price per 1000 output (completion) tokens
    pub output_per_1k: f64,
}

/// A named model configuration selectable for a summarization request
///
/// Rates as of 2024 - adjust as pricing changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelTier {
    /// Baseline tier for typical input sizes
    Gpt35Turbo,
    Gpt4,
    Gpt4Turbo,
    /// Lower-cost, larger-context tier for long inputs
    Gpt4oMini,
}

impl ModelTier {
    /// The tier used when no other selection applies
    pub const BASELINE: ModelTier = ModelTier::Gpt35Turbo;

    /// The model name sent to the provider and used in price lookups
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelTier::Gpt35Turbo => "gpt-3.5-turbo",
            ModelTier::Gpt4 => "gpt-4",
            ModelTier::Gpt4Turbo => "gpt-4-turbo",
            ModelTier::Gpt4oMini => "gpt-4o-mini",
        }
    }

    /// Price rates for this tier
    pub fn rates(&self) -> PriceRates {
        match self {
            ModelTier::Gpt35Turbo => PriceRates {
                input_per_1k: 0.0015,
                output_per_1k: 0.002,
            },
            ModelTier::Gpt4 => PriceRates {
                input_per_1k: 0.03,
                output_per_1k: 0.06,
            },
            ModelTier::Gpt4Turbo => PriceRates {
                input_per_1k: 0.01,
                output_per_1k: 0.03,
            },
            ModelTier::Gpt4oMini => PriceRates {
                input_per_1k: 0.00015,
                output_per_1k: 0.0006,
            },
        }
    }

    /// Parse a model name, rejecting unknown names
    ///
    /// Snapshot suffixes are accepted ("gpt-3.5-turbo-0125" resolves to
    /// [`ModelTier::Gpt35Turbo`]) since providers report served models with
    /// a date suffix. Use this where strictness matters, e.g. validating
    /// configuration.
    pub fn parse(name: &str) -> Option<Self> {
        // Longest prefix first: "gpt-4-turbo" and "gpt-4o-mini" both start
        // with "gpt-4"
        const TIERS: [ModelTier; 4] = [
            ModelTier::Gpt35Turbo,
            ModelTier::Gpt4oMini,
            ModelTier::Gpt4Turbo,
            ModelTier::Gpt4,
        ];
        TIERS
            .into_iter()
            .find(|tier| name.starts_with(tier.as_str()))
    }

    /// Resolve a model name for pricing, falling back to the baseline tier
    ///
    /// Unrecognized names price as [`ModelTier::BASELINE`]; the fallback is
    /// logged so it never happens silently.
    pub fn from_name(name: &str) -> Self {
        match Self::parse(name) {
            Some(tier) => tier,
            None => {
                tracing::warn!(model = name, "unknown model name, pricing as baseline tier");
                Self::BASELINE
            }
        }
    }
}

impl fmt::Display for ModelTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
