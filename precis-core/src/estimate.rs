//! Coarse token estimation from raw text
//!
//! Input tokens are approximated at ~4 characters per token, a common
//! heuristic that works reasonably well across models. The output budget is
//! proportional to input length: one summary word per ten input words,
//! capped, at ~1.3 tokens per word. Exact counts are only known from the
//! provider's post-call usage report; these figures exist to price a
//! request before it is made.
//!
//! The same function serves both the live-preview path and the
//! authoritative server path; only the word cap differs between them.

/// Word cap for the authoritative path - the summary length actually
/// requested from the provider
pub const SUMMARY_WORD_CAP: u32 = 400;

/// Word cap for the live preview path
///
/// Intentionally looser than [`SUMMARY_WORD_CAP`]: the preview is a rough
/// upper bound for display, while the authoritative path enforces the
/// tighter cap that is sent to the provider.
pub const PREVIEW_WORD_CAP: u32 = 2000;

/// Characters per input token
const CHARS_PER_TOKEN: usize = 4;

/// Input words per summary word
const WORDS_PER_SUMMARY_WORD: u32 = 10;

/// Tokens per summary word
const TOKENS_PER_WORD: f64 = 1.3;

/// Token figures derived from one piece of input text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenEstimate {
    /// Estimated input (prompt) tokens: `ceil(chars / 4)`
    pub input_tokens: u32,

    /// Output token budget to request from the provider:
    /// `ceil(min(ceil(words / 10), cap) * 1.3)`
    pub output_budget: u32,

    /// Expected output tokens for cost estimation
    ///
    /// The budget additionally capped at half the input tokens - summaries
    /// rarely exceed half the input's token count, and pricing the full
    /// budget would overestimate short-input requests.
    pub estimated_output: u32,
}

/// Estimate input tokens for raw text
pub fn estimate_input_tokens(text: &str) -> u32 {
    text.len().div_ceil(CHARS_PER_TOKEN) as u32
}

/// Estimate token figures for raw text under the given summary word cap
///
/// Pure function of its arguments. Empty and whitespace-only text yields an
/// all-zero estimate; callers are expected to have rejected such input
/// upstream.
pub fn estimate_tokens(text: &str, word_cap: u32) -> TokenEstimate {
    let input_tokens = estimate_input_tokens(text);

    let word_count = text.split_whitespace().count() as u32;
    let proportional_words = word_count.div_ceil(WORDS_PER_SUMMARY_WORD).min(word_cap);
    let output_budget = (f64::from(proportional_words) * TOKENS_PER_WORD).ceil() as u32;

    TokenEstimate {
        input_tokens,
        output_budget,
        estimated_output: output_budget.min(input_tokens.div_ceil(2)),
    }
}

/// Estimate token figures the way the live preview does
///
/// Same formulas as [`estimate_tokens`] under the looser
/// [`PREVIEW_WORD_CAP`], exposed so UI clients share the server's
/// arithmetic instead of duplicating it.
pub fn estimate_preview(text: &str) -> TokenEstimate {
    estimate_tokens(text, PREVIEW_WORD_CAP)
}
