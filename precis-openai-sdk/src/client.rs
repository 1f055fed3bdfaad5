//! OpenAI API client

use crate::chat::{ChatCompletion, ChatCompletionParams};
use crate::error::{ApiErrorResponse, OpenAiError};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use std::time::Duration;

/// Default API base URL
const DEFAULT_API_BASE: &str = "https://api.openai.com";

/// Default request timeout
///
/// A completion that takes longer than this has effectively hung; there is
/// no retry layer above this client, so the timeout is the only bound on a
/// stuck provider call.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

// ============================================================================
// Client
// ============================================================================

/// OpenAI API client
///
/// Cheap to clone; the underlying connection pool is shared. Construct once
/// at startup and reuse for the lifetime of the process.
#[derive(Clone)]
pub struct OpenAi {
    client: reqwest::Client,
    api_key: String,
    api_base: String,
}

impl std::fmt::Debug for OpenAi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAi")
            .field("api_base", &self.api_base)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl OpenAi {
    /// Create a new client with an explicit API key
    pub fn new(api_key: impl Into<String>) -> Result<Self, OpenAiError> {
        Self::builder().api_key(api_key).build()
    }

    /// Create a new client from the OPENAI_API_KEY environment variable
    pub fn from_env() -> Result<Self, OpenAiError> {
        let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| {
            OpenAiError::Configuration("OPENAI_API_KEY environment variable not set".to_string())
        })?;
        Self::new(api_key)
    }

    /// Create a builder for more advanced configuration
    pub fn builder() -> OpenAiBuilder {
        OpenAiBuilder::new()
    }

    /// Get a handle to the Chat Completions API
    pub fn chat(&self) -> Chat<'_> {
        Chat { client: self }
    }

    fn build_headers(&self) -> Result<HeaderMap, OpenAiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let auth = format!("Bearer {}", self.api_key);
        let mut auth_value = HeaderValue::from_str(&auth)
            .map_err(|_| OpenAiError::Configuration("API key contains invalid characters".to_string()))?;
        auth_value.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth_value);

        Ok(headers)
    }

    /// Execute a POST request and parse the response
    ///
    /// Requests are made exactly once. Transport failures and non-success
    /// statuses are classified into [`OpenAiError`] variants and returned
    /// to the caller immediately.
    async fn execute<T, B>(&self, url: &str, body: &B) -> Result<T, OpenAiError>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize,
    {
        let headers = self.build_headers()?;

        let response = self
            .client
            .post(url)
            .headers(headers)
            .json(body)
            .send()
            .await
            .map_err(OpenAiError::from_reqwest_error)?;

        let status = response.status();

        if status.is_success() {
            return response.json::<T>().await.map_err(|e| {
                OpenAiError::InvalidResponse(format!("Failed to parse response: {}", e))
            });
        }

        let status_code = status.as_u16();
        let error_body = response.text().await.unwrap_or_default();
        Err(parse_error_response(&error_body, status_code))
    }
}

/// Parse an error body into an [`OpenAiError`]
///
/// Falls back to a status-based classification when the body is not the
/// documented error envelope.
fn parse_error_response(body: &str, status_code: u16) -> OpenAiError {
    match serde_json::from_str::<ApiErrorResponse>(body) {
        Ok(parsed) => OpenAiError::from_api_error(&parsed.error, status_code),
        Err(_) => {
            let msg = if body.is_empty() {
                format!("HTTP {}", status_code)
            } else {
                format!("HTTP {}: {}", status_code, body)
            };
            match status_code {
                401 => OpenAiError::Authentication(msg),
                429 => OpenAiError::RateLimited(msg),
                500..=599 => OpenAiError::ServiceUnavailable(msg),
                _ => OpenAiError::Other(msg),
            }
        }
    }
}

/// Builder for OpenAI client configuration
///
/// Create with [`OpenAi::builder()`] and configure using the fluent API.
/// The `api_key` is required - call [`Self::build()`] to create the client.
pub struct OpenAiBuilder {
    api_key: Option<String>,
    api_base: Option<String>,
    timeout: Option<Duration>,
}

impl OpenAiBuilder {
    fn new() -> Self {
        Self {
            api_key: None,
            api_base: None,
            timeout: None,
        }
    }

    /// Set the API key
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set a custom API base URL
    pub fn api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = Some(api_base.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client
    pub fn build(self) -> Result<OpenAi, OpenAiError> {
        let api_key = self
            .api_key
            .ok_or_else(|| OpenAiError::Configuration("API key is required".to_string()))?;

        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                OpenAiError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(OpenAi {
            client,
            api_key,
            api_base: self
                .api_base
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
        })
    }
}

// ============================================================================
// Chat Completions API
// ============================================================================

/// Chat Completions API handle
pub struct Chat<'a> {
    client: &'a OpenAi,
}

impl Chat<'_> {
    /// Create a chat completion
    pub async fn create(
        &self,
        params: ChatCompletionParams,
    ) -> Result<ChatCompletion, OpenAiError> {
        let url = format!("{}/v1/chat/completions", self.client.api_base);
        self.client.execute(&url, &params).await
    }
}


#[cfg(test)]
mod wiremock_tests {
    use super::*;
    use crate::chat::ChatRole;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn completion_response_json() -> serde_json::Value {
        serde_json::json!({
            "id": "chatcmpl-test123",
            "object": "chat.completion",
            "created": 1700000000,
            "model": "gpt-3.5-turbo-0125",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": "Hello!"},
                "finish_reason": "stop"
            }],
            "usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15}
        })
    }

    fn error_response_json(error_type: &str, message: &str, code: &str) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "message": message,
                "type": error_type,
                "param": null,
                "code": code
            }
        })
    }

    fn test_params() -> ChatCompletionParams {
        ChatCompletionParams::builder("gpt-3.5-turbo")
            .user("Hi")
            .build()
    }

    #[tokio::test]
    async fn test_successful_completion_create() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("authorization", "Bearer test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_response_json()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = OpenAi::builder()
            .api_key("test-key")
            .api_base(mock_server.uri())
            .build()
            .unwrap();

        let completion = client.chat().create(test_params()).await.unwrap();

        assert_eq!(completion.id, "chatcmpl-test123");
        assert_eq!(completion.choices[0].message.role, ChatRole::Assistant);
        assert_eq!(
            completion.choices[0].message.content.as_deref(),
            Some("Hello!")
        );
        assert_eq!(completion.usage.unwrap().total_tokens, 15);
    }

    #[tokio::test]
    async fn test_request_body_carries_model_and_messages() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(body_partial_json(serde_json::json!({
                "model": "gpt-4o-mini",
                "temperature": 0.7,
                "max_tokens": 500
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_response_json()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = OpenAi::builder()
            .api_key("test-key")
            .api_base(mock_server.uri())
            .build()
            .unwrap();

        let params = ChatCompletionParams::builder("gpt-4o-mini")
            .system("Summarize.")
            .user("Some text")
            .temperature(0.7)
            .max_tokens(500)
            .build();

        client.chat().create(params).await.unwrap();
    }

    #[tokio::test]
    async fn test_authentication_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(401).set_body_json(error_response_json(
                "invalid_request_error",
                "Incorrect API key provided",
                "invalid_api_key",
            )))
            .mount(&mock_server)
            .await;

        let client = OpenAi::builder()
            .api_key("bad-key")
            .api_base(mock_server.uri())
            .build()
            .unwrap();

        let result = client.chat().create(test_params()).await;
        assert!(matches!(result, Err(OpenAiError::Authentication(_))));
    }

    #[tokio::test]
    async fn test_rate_limit_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(429).set_body_json(error_response_json(
                "insufficient_quota",
                "You exceeded your current quota",
                "insufficient_quota",
            )))
            .mount(&mock_server)
            .await;

        let client = OpenAi::builder()
            .api_key("test-key")
            .api_base(mock_server.uri())
            .build()
            .unwrap();

        let result = client.chat().create(test_params()).await;
        assert!(matches!(result, Err(OpenAiError::RateLimited(_))));
    }

    #[tokio::test]
    async fn test_malformed_success_body_is_invalid_response() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let client = OpenAi::builder()
            .api_key("test-key")
            .api_base(mock_server.uri())
            .build()
            .unwrap();

        let result = client.chat().create(test_params()).await;
        assert!(matches!(result, Err(OpenAiError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_network_error() {
        // Nothing is listening on this port
        let client = OpenAi::builder()
            .api_key("test-key")
            .api_base("http://127.0.0.1:1")
            .build()
            .unwrap();

        let result = client.chat().create(test_params()).await;
        assert!(matches!(result, Err(OpenAiError::Network(_))));
    }
}
