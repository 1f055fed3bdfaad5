//! Request and response types for one summarization

use crate::error::SummarizeError;
use serde::{Deserialize, Serialize};

/// One user-submitted summarization request
///
/// Created per submission, consumed once.
#[derive(Debug, Clone, Deserialize)]
pub struct SummaryRequest {
    /// The text to summarize
    pub text: String,

    /// Creativity parameter, 0.0 to 1.0 inclusive
    pub temperature: f32,

    /// Maximum output tokens; the summarizer applies its default if unset
    #[serde(default)]
    pub max_tokens: Option<u32>,
}

impl SummaryRequest {
    /// Validate client input
    ///
    /// Rejects empty or whitespace-only text and temperatures outside
    /// `[0, 1]` (non-finite values included). Error messages name the
    /// violated constraint; they are returned verbatim to the client.
    pub fn validate(&self) -> Result<(), SummarizeError> {
        if self.text.trim().is_empty() {
            return Err(SummarizeError::InvalidInput(
                "Text input is required".to_string(),
            ));
        }
        if !self.temperature.is_finite() || !(0.0..=1.0).contains(&self.temperature) {
            return Err(SummarizeError::InvalidInput(
                "Temperature must be between 0 and 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Token usage for one served request, as reported by the provider
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokensUsed {
    pub input: u32,
    pub output: u32,
    pub total: u32,
}

/// The result of one successful summarization
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    /// The generated summary text
    pub summary: String,

    /// Actual cost in currency units, rounded to 5 decimal places
    pub cost: f64,

    /// The provider's reported token usage
    pub tokens_used: TokensUsed,

    /// The model that actually served the request
    pub model: String,
}
