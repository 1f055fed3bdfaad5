//! Error types for the precis server.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use precis_core::SummarizeError;

/// Errors that can occur when building a router.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// No endpoints were configured.
    #[error("No endpoints configured. Call .with_summarize() before .build()")]
    NoEndpoints,
}

/// A [`SummarizeError`] crossing the HTTP boundary.
///
/// Converts into the service's JSON error envelope: always an `error`
/// message, with the cost-exceeded variants additionally carrying the
/// numeric amounts so clients and monitoring can distinguish blocked spend
/// (`estimatedCost`) from incurred spend (`actualCost`).
#[derive(Debug)]
pub struct ApiError(pub SummarizeError);

impl From<SummarizeError> for ApiError {
    fn from(err: SummarizeError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self.0 {
            SummarizeError::InvalidInput(_) => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({ "error": self.0.to_string() }),
            ),
            SummarizeError::EstimatedCostExceeded { estimated, ceiling } => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({
                    "error": self.0.to_string(),
                    "estimatedCost": estimated,
                    "maxAllowedCost": ceiling,
                }),
            ),
            SummarizeError::ActualCostExceeded { actual, ceiling } => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({
                    "error": self.0.to_string(),
                    "actualCost": actual,
                    "maxAllowedCost": ceiling,
                }),
            ),
            SummarizeError::MissingUsage | SummarizeError::Provider(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::json!({ "error": self.0.to_string() }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
