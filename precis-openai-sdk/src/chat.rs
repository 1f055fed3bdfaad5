//! Request and response types for the Chat Completions API
//!
//! Types follow a naming convention:
//! - Request types use a `Param` suffix (e.g., `ChatMessageParam`)
//! - Response types have no suffix (e.g., `ChatMessage`, `Choice`)

use serde::{Deserialize, Serialize};

// ============================================================================
// Request Types
// ============================================================================

/// Parameters for creating a chat completion
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionParams {
    /// The model to use (e.g., "gpt-3.5-turbo")
    pub model: String,

    /// The messages in the conversation
    pub messages: Vec<ChatMessageParam>,

    /// Sampling temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Maximum tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl ChatCompletionParams {
    /// Create a builder for the given model
    pub fn builder(model: impl Into<String>) -> ChatCompletionParamsBuilder {
        ChatCompletionParamsBuilder::new(model)
    }
}

/// A single message in a chat completion request
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessageParam {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessageParam {
    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

/// Message author role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

/// Builder for [`ChatCompletionParams`]
#[derive(Debug, Clone)]
pub struct ChatCompletionParamsBuilder {
    model: String,
    messages: Vec<ChatMessageParam>,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
}

impl ChatCompletionParamsBuilder {
    fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: Vec::new(),
            temperature: None,
            max_tokens: None,
        }
    }

    /// Append a system message
    pub fn system(mut self, content: impl Into<String>) -> Self {
        self.messages.push(ChatMessageParam::system(content));
        self
    }

    /// Append a user message
    pub fn user(mut self, content: impl Into<String>) -> Self {
        self.messages.push(ChatMessageParam::user(content));
        self
    }

    /// Set the sampling temperature
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the maximum number of tokens to generate
    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Build the final parameters
    pub fn build(self) -> ChatCompletionParams {
        ChatCompletionParams {
            model: self.model,
            messages: self.messages,
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }
}

// ============================================================================
// Response Types
// ============================================================================

/// A chat completion response
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletion {
    /// Unique completion ID
    pub id: String,

    /// The model that actually served the request
    ///
    /// May carry a snapshot suffix (e.g., "gpt-3.5-turbo-0125") and can
    /// differ from the requested model name.
    pub model: String,

    /// Generated choices (one unless `n` was requested)
    pub choices: Vec<Choice>,

    /// Token usage for this request
    ///
    /// `None` if the API omitted the usage report. Callers that bill or
    /// account by token count must treat that as an error rather than
    /// assume zero.
    #[serde(default)]
    pub usage: Option<Usage>,
}

/// One generated completion choice
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub index: u32,
    pub message: ChatMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// A message in a chat completion response
///
/// Unlike [`ChatMessageParam`], the content is optional: the API returns
/// `null` content for refusals and some tool-call responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    #[serde(default)]
    pub content: Option<String>,
}

/// Token usage reported by the API
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Usage {
    /// Tokens in the input (prompt)
    pub prompt_tokens: u32,

    /// Tokens in the output (completion)
    pub completion_tokens: u32,

    /// Total tokens billed
    pub total_tokens: u32,
}
