//! Core logic for the precis summarization service
//!
//! Everything with rule-based structure lives here:
//!
//! - [`estimate`] - coarse token estimation from raw text
//! - [`tier`] - the supported model tiers and their price rates
//! - [`cost`] - token counts × tier rates → a rounded cost breakdown
//! - [`budget`] - the per-request cost ceiling and its two checks
//! - [`summarizer`] - the provider client wrapper that ties it together
//!
//! The flow for one request:
//!
//! ```text
//! text ──> estimate_tokens ──> select_tier ──> CostEstimate ──> CostCeiling (pre-call)
//!                                                                    │
//!                                  CostCeiling (post-call) <── Summarizer::summarize
//! ```
//!
//! Estimation is heuristic (characters and words); only the provider's
//! post-call usage report is exact. Both the estimated and the actual cost
//! must clear the same ceiling for a request to succeed.

pub mod budget;
pub mod cost;
pub mod error;
pub mod estimate;
pub mod summarizer;
pub mod tier;
pub mod types;

// Re-exports
pub use budget::CostCeiling;
pub use cost::{format_cost, CostEstimate};
pub use error::SummarizeError;
pub use estimate::{
    estimate_input_tokens, estimate_preview, estimate_tokens, TokenEstimate, PREVIEW_WORD_CAP,
    SUMMARY_WORD_CAP,
};
pub use summarizer::{Summarizer, DEFAULT_MAX_OUTPUT_TOKENS, TIER_INPUT_TOKEN_THRESHOLD};
pub use tier::{ModelTier, PriceRates};
pub use types::{SummaryRequest, SummaryResponse, TokensUsed};
