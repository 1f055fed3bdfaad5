//! The summarization endpoint.
//!
//! Request flow: validate -> estimate -> pre-call ceiling check -> provider
//! call -> post-call ceiling check. The pre-call check runs on this side of
//! the provider boundary so an over-budget request is rejected before any
//! spend occurs; the post-call check re-verifies with the provider's actual
//! usage report.

use axum::{extract::State, Json};
use precis_core::{
    estimate_tokens, CostEstimate, SummaryRequest, SummaryResponse, SUMMARY_WORD_CAP,
};
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::AppState;

/// Wire format of the request body.
///
/// Missing fields fall back to defaults and are caught by validation
/// (empty text) or accepted as-is (temperature 0), matching the permissive
/// shape clients already send.
#[derive(Debug, Deserialize)]
pub(crate) struct SummarizeBody {
    #[serde(default)]
    text: String,
    #[serde(default)]
    temperature: f32,
}

pub(crate) async fn summarize_handler(
    State(state): State<AppState>,
    Json(body): Json<SummarizeBody>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let request = SummaryRequest {
        text: body.text,
        temperature: body.temperature,
        max_tokens: None,
    };
    request.validate()?;

    let text = request.text.trim();
    let estimate = estimate_tokens(text, SUMMARY_WORD_CAP);

    // The tier selected here is the tier the summarizer will use for the
    // same text, so the pre-call estimate prices at the rates the request
    // will actually incur.
    let tier = state.summarizer.select_tier(estimate.input_tokens);
    let pre_call = CostEstimate::calculate(estimate.input_tokens, estimate.estimated_output, tier);
    state.ceiling.check_estimated(&pre_call)?;

    let request = SummaryRequest {
        text: text.to_string(),
        temperature: request.temperature,
        max_tokens: Some(estimate.output_budget),
    };
    let response = state.summarizer.summarize(&request).await?;

    if let Err(err) = state.ceiling.check_actual(response.cost) {
        // The provider has already been called and billed at this point.
        tracing::warn!(
            cost = response.cost,
            ceiling = state.ceiling.amount(),
            model = %response.model,
            "request exceeded cost ceiling after the provider call"
        );
        return Err(err.into());
    }

    tracing::info!(
        model = %response.model,
        cost = response.cost,
        tokens = response.tokens_used.total,
        "summarization served"
    );

    Ok(Json(response))
}
