//! Summarization client
//!
//! A thin wrapper over the OpenAI client that owns everything
//! provider-facing: model tier selection, the fixed summarization
//! instruction, and turning the provider's reply into a [`SummaryResponse`]
//! with a verified cost.
//!
//! The client is an explicit dependency, injected at construction; its
//! credential is validated once, there, rather than lazily at first use.

use crate::cost::CostEstimate;
use crate::error::SummarizeError;
use crate::estimate::estimate_input_tokens;
use crate::tier::ModelTier;
use crate::types::{SummaryRequest, SummaryResponse, TokensUsed};
use precis_openai_sdk::{ChatCompletionParams, OpenAi};

/// Estimated input tokens above which the larger-context tier is selected
pub const TIER_INPUT_TOKEN_THRESHOLD: u32 = 8000;

/// Output token ceiling applied when a request does not specify one
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 500;

/// System instruction sent with every summarization
const SYSTEM_PROMPT: &str = "You are a helpful assistant that creates concise, accurate \
    summaries. Focus on the main points and key insights while maintaining clarity and \
    readability.";

/// Returned when the provider produces no usable completion text
const NO_SUMMARY_SENTINEL: &str = "No summary generated";

/// Summarization client wrapping an [`OpenAi`] handle
///
/// # Example
///
/// ```no_run
/// use precis_core::Summarizer;
/// use precis_openai_sdk::OpenAi;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// // Credential validated here, once - not on first request
/// let summarizer = Summarizer::new(OpenAi::from_env()?);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Summarizer {
    client: OpenAi,
    tier_override: Option<ModelTier>,
}

impl Summarizer {
    /// Create a summarizer over an existing client
    pub fn new(client: OpenAi) -> Self {
        Self {
            client,
            tier_override: None,
        }
    }

    /// Pin every request to the given tier instead of selecting by size
    pub fn with_tier_override(mut self, tier: ModelTier) -> Self {
        self.tier_override = Some(tier);
        self
    }

    /// Select the model tier for the given estimated input size
    ///
    /// Inputs above [`TIER_INPUT_TOKEN_THRESHOLD`] go to the lower-cost,
    /// larger-context tier; everything else uses the baseline. The tier
    /// returned here is the one used for the provider request and for all
    /// pricing of it - callers computing a pre-call estimate must use this
    /// same selection.
    pub fn select_tier(&self, estimated_input_tokens: u32) -> ModelTier {
        if let Some(tier) = self.tier_override {
            return tier;
        }
        if estimated_input_tokens > TIER_INPUT_TOKEN_THRESHOLD {
            ModelTier::Gpt4oMini
        } else {
            ModelTier::BASELINE
        }
    }

    /// Summarize the request's text
    ///
    /// One round trip to the provider. Provider failures propagate
    /// immediately (no retry); a response without usage information is an
    /// error, since the actual cost cannot be verified without it.
    pub async fn summarize(
        &self,
        request: &SummaryRequest,
    ) -> Result<SummaryResponse, SummarizeError> {
        let text = request.text.trim();
        let tier = self.select_tier(estimate_input_tokens(text));

        tracing::debug!(model = %tier, "dispatching summarization request");

        let params = ChatCompletionParams::builder(tier.as_str())
            .system(SYSTEM_PROMPT)
            .user(format!(
                "Please provide a clear and concise summary of the following text:\n\n{}",
                text
            ))
            .temperature(request.temperature)
            .max_tokens(request.max_tokens.unwrap_or(DEFAULT_MAX_OUTPUT_TOKENS))
            .build();

        let completion = self.client.chat().create(params).await?;

        let usage = completion.usage.ok_or(SummarizeError::MissingUsage)?;

        let summary = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .unwrap_or_else(|| NO_SUMMARY_SENTINEL.to_string());

        let cost = CostEstimate::calculate(usage.prompt_tokens, usage.completion_tokens, tier);

        Ok(SummaryResponse {
            summary,
            cost: cost.total_cost,
            tokens_used: TokensUsed {
                input: usage.prompt_tokens,
                output: usage.completion_tokens,
                total: usage.total_tokens,
            },
            model: completion.model,
        })
    }
}


#[cfg(test)]
mod wiremock_tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn request(text: impl Into<String>) -> SummaryRequest {
        SummaryRequest {
            text: text.into(),
            temperature: 0.3,
            max_tokens: None,
        }
    }

    async fn mock_summarizer(server: &MockServer) -> Summarizer {
        let client = OpenAi::builder()
            .api_key("test-key")
            .api_base(server.uri())
            .build()
            .unwrap();
        Summarizer::new(client)
    }

    fn completion_json(
        model: &str,
        content: serde_json::Value,
        usage: Option<serde_json::Value>,
    ) -> serde_json::Value {
        let mut body = serde_json::json!({
            "id": "chatcmpl-test",
            "object": "chat.completion",
            "created": 1700000000,
            "model": model,
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": content},
                "finish_reason": "stop"
            }]
        });
        if let Some(usage) = usage {
            body["usage"] = usage;
        }
        body
    }

    #[tokio::test]
    async fn test_summarize_returns_priced_response() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(body_partial_json(serde_json::json!({
                "model": "gpt-3.5-turbo",
                "temperature": 0.3,
                "max_tokens": 500
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_json(
                "gpt-3.5-turbo-0125",
                serde_json::json!("A short summary."),
                Some(serde_json::json!({
                    "prompt_tokens": 1000,
                    "completion_tokens": 100,
                    "total_tokens": 1100
                })),
            )))
            .expect(1)
            .mount(&server)
            .await;

        let response = mock_summarizer(&server)
            .await
            .summarize(&request("Some text to summarize."))
            .await
            .unwrap();

        assert_eq!(response.summary, "A short summary.");
        assert_eq!(response.model, "gpt-3.5-turbo-0125");
        assert_eq!(
            response.tokens_used,
            TokensUsed {
                input: 1000,
                output: 100,
                total: 1100
            }
        );
        // 1000 * 0.0015/1K + 100 * 0.002/1K
        assert!((response.cost - 0.0017).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_long_input_selects_larger_context_tier_and_prices_with_it() {
        let server = MockServer::start().await;

        // 36_000 chars -> 9000 estimated input tokens, over the threshold
        let text = "x".repeat(36_000);

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(body_partial_json(serde_json::json!({"model": "gpt-4o-mini"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_json(
                "gpt-4o-mini-2024-07-18",
                serde_json::json!("A summary of a long document."),
                Some(serde_json::json!({
                    "prompt_tokens": 9000,
                    "completion_tokens": 200,
                    "total_tokens": 9200
                })),
            )))
            .expect(1)
            .mount(&server)
            .await;

        let response = mock_summarizer(&server)
            .await
            .summarize(&request(text))
            .await
            .unwrap();

        // Priced at gpt-4o-mini rates, not baseline:
        // 9000 * 0.00015/1K + 200 * 0.0006/1K = 0.00135 + 0.00012
        assert!((response.cost - 0.00147).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_missing_usage_is_an_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_json(
                "gpt-3.5-turbo",
                serde_json::json!("A summary."),
                None,
            )))
            .mount(&server)
            .await;

        let result = mock_summarizer(&server)
            .await
            .summarize(&request("Some text."))
            .await;

        assert!(matches!(result, Err(SummarizeError::MissingUsage)));
    }

    #[tokio::test]
    async fn test_null_content_yields_sentinel_summary() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_json(
                "gpt-3.5-turbo",
                serde_json::Value::Null,
                Some(serde_json::json!({
                    "prompt_tokens": 10,
                    "completion_tokens": 0,
                    "total_tokens": 10
                })),
            )))
            .mount(&server)
            .await;

        let response = mock_summarizer(&server)
            .await
            .summarize(&request("Some text."))
            .await
            .unwrap();

        assert_eq!(response.summary, "No summary generated");
    }

    #[tokio::test]
    async fn test_provider_failure_propagates() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "error": {
                    "message": "Incorrect API key provided",
                    "type": "invalid_request_error",
                    "code": "invalid_api_key"
                }
            })))
            .mount(&server)
            .await;

        let result = mock_summarizer(&server)
            .await
            .summarize(&request("Some text."))
            .await;

        assert!(matches!(result, Err(SummarizeError::Provider(_))));
    }

    #[tokio::test]
    async fn test_request_text_is_trimmed() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(body_partial_json(serde_json::json!({
                "messages": [
                    {"role": "system", "content": SYSTEM_PROMPT},
                    {
                        "role": "user",
                        "content": "Please provide a clear and concise summary of the following text:\n\nhello world"
                    }
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_json(
                "gpt-3.5-turbo",
                serde_json::json!("Hi."),
                Some(serde_json::json!({
                    "prompt_tokens": 30,
                    "completion_tokens": 2,
                    "total_tokens": 32
                })),
            )))
            .expect(1)
            .mount(&server)
            .await;

        mock_summarizer(&server)
            .await
            .summarize(&request("  hello world \n"))
            .await
            .unwrap();
    }
}
