//! Minimal OpenAI API client for precis
//!
//! This crate provides a lightweight, focused client for the OpenAI Chat
//! Completions API. It covers exactly what a single-shot completion needs:
//! a configurable client, request parameters, and classified errors.
//!
//! # Quick Start
//!
//! ```no_run
//! // Requires OPENAI_API_KEY environment variable
//! use precis_openai_sdk::{OpenAi, ChatCompletionParams};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OpenAi::from_env()?;
//!
//! let params = ChatCompletionParams::builder("gpt-3.5-turbo")
//!     .system("You are a helpful assistant.")
//!     .user("Hello!")
//!     .max_tokens(256)
//!     .build();
//!
//! let completion = client.chat().create(params).await?;
//! println!("{:?}", completion.choices.first());
//! # Ok(())
//! # }
//! ```
//!
//! # Errors
//!
//! API failures are classified into [`OpenAiError`] variants so callers can
//! distinguish credential problems ([`OpenAiError::Authentication`],
//! [`OpenAiError::Configuration`]) from transient transport failures
//! ([`OpenAiError::Network`]) and malformed responses
//! ([`OpenAiError::InvalidResponse`]).
//!
//! # What this crate does not do
//!
//! No streaming, no tool use, no automatic retries. A failed request is
//! returned to the caller immediately; retry policy belongs to the caller.

mod chat;
mod client;
mod error;

// Client types
pub use client::{Chat, OpenAi, OpenAiBuilder};

// Error types
pub use error::{ApiError, ApiErrorResponse, OpenAiError};

// Chat Completions - request types
pub use chat::{ChatCompletionParams, ChatCompletionParamsBuilder, ChatMessageParam, ChatRole};

// Chat Completions - response types
pub use chat::{ChatCompletion, ChatMessage, Choice, Usage};
