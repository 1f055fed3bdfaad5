//! Error types for summarization

use precis_openai_sdk::OpenAiError;

/// Errors that can occur while handling a summarization request
#[derive(Debug, thiserror::Error)]
pub enum SummarizeError {
    /// Client input is malformed (empty text, out-of-range temperature)
    #[error("{0}")]
    InvalidInput(String),

    /// The pre-call cost estimate exceeds the configured ceiling
    ///
    /// Raised before the provider is contacted; no spend has occurred.
    #[error("Estimated cost ({estimated:.4}) exceeds maximum allowed cost (${ceiling})")]
    EstimatedCostExceeded { estimated: f64, ceiling: f64 },

    /// The actual cost reported by the provider exceeds the ceiling
    ///
    /// Raised after the provider call; the cost has already been incurred.
    /// This is a safety net, not a prevention mechanism - monitoring built
    /// on these errors must treat the two cost variants differently.
    #[error("Actual cost ({actual:.4}) exceeds maximum allowed cost (${ceiling})")]
    ActualCostExceeded { actual: f64, ceiling: f64 },

    /// The provider response omitted usage information
    ///
    /// Without a usage report the actual cost cannot be verified, so the
    /// response is unusable.
    #[error("No usage information received from the provider")]
    MissingUsage,

    /// The provider call itself failed (credentials, network, API error)
    #[error(transparent)]
    Provider(#[from] OpenAiError),
}

impl SummarizeError {
    /// Whether this error was raised before any provider spend occurred
    pub fn pre_call(&self) -> bool {
        !matches!(self, SummarizeError::ActualCostExceeded { .. })
    }
}
