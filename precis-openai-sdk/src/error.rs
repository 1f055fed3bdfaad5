//! Error types for the OpenAI SDK

use serde::Deserialize;
use thiserror::Error;

// ============================================================================
// API Error Types
// ============================================================================

/// API error response wrapper
///
/// OpenAI wraps error details in an `error` object:
/// `{"error": {"message": "...", "type": "...", "code": "..."}}`
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiError,
}

/// API error details
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: String,
    #[serde(default)]
    pub code: Option<String>,
}

// ============================================================================
// SDK Error Types
// ============================================================================

/// Errors that can occur when using the OpenAI API
#[derive(Debug, Error)]
pub enum OpenAiError {
    /// Authentication failed (invalid or missing API key)
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Rate limited or out of quota
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// Service unavailable or overloaded
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Invalid request (bad parameters, unknown model, etc.)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Invalid response (failed to parse API response)
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Network error
    #[error("Network error: {0}")]
    Network(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error (missing API key, etc.)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Other/unknown error
    #[error("{0}")]
    Other(String),
}

impl OpenAiError {
    /// Classify an API error response into an appropriate error variant
    pub fn from_api_error(error: &ApiError, status_code: u16) -> Self {
        let msg = error.message.clone();
        let code = error.code.as_deref().unwrap_or_default();

        match (status_code, error.error_type.as_str(), code) {
            (401, _, _) | (_, "authentication_error", _) | (_, _, "invalid_api_key") => {
                OpenAiError::Authentication(msg)
            }
            (429, _, _) | (_, "rate_limit_error", _) | (_, _, "insufficient_quota") => {
                OpenAiError::RateLimited(msg)
            }
            (500..=599, _, _) | (_, "server_error", _) => OpenAiError::ServiceUnavailable(msg),
            (400, _, _) | (404, _, _) | (_, "invalid_request_error", _) => {
                OpenAiError::InvalidRequest(msg)
            }
            _ => OpenAiError::Other(msg),
        }
    }

    /// Classify an HTTP transport error into an appropriate error variant
    pub fn from_reqwest_error(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            OpenAiError::Network(format!("Request timed out: {}", err))
        } else if err.is_connect() {
            OpenAiError::Network(format!("Connection failed: {}", err))
        } else if err.is_request() {
            OpenAiError::Network(format!("Request failed: {}", err))
        } else if let Some(status) = err.status() {
            match status.as_u16() {
                401 => OpenAiError::Authentication(err.to_string()),
                429 => OpenAiError::RateLimited(err.to_string()),
                500..=599 => OpenAiError::ServiceUnavailable(err.to_string()),
                _ => OpenAiError::Other(err.to_string()),
            }
        } else {
            OpenAiError::Other(err.to_string())
        }
    }
}
