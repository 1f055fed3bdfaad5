//! Router builder for precis HTTP endpoints.

use std::sync::Arc;

use axum::Router;
use precis_core::{CostCeiling, Summarizer};

use crate::error::BuildError;
use crate::state::AppState;

/// Builder for configuring precis HTTP endpoints.
///
/// # Example
///
/// ```rust,no_run
/// use precis_core::{CostCeiling, Summarizer};
/// use precis_server::PrecisRouter;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// # let summarizer: Summarizer = todo!();
/// let app = PrecisRouter::new(summarizer, CostCeiling::default())
///     .with_summarize("/api/summarize")
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct PrecisRouter {
    summarizer: Arc<Summarizer>,
    ceiling: CostCeiling,
    summarize_path: Option<String>,
}

impl PrecisRouter {
    /// Create a new router builder with the given summarizer and ceiling.
    ///
    /// The summarizer will be wrapped in an `Arc` for sharing across
    /// handlers.
    pub fn new(summarizer: Summarizer, ceiling: CostCeiling) -> Self {
        Self::from_arc(Arc::new(summarizer), ceiling)
    }

    /// Create a new router builder from an existing `Arc<Summarizer>`.
    ///
    /// Use this when you need to share the summarizer with other parts of
    /// your application.
    pub fn from_arc(summarizer: Arc<Summarizer>, ceiling: CostCeiling) -> Self {
        Self {
            summarizer,
            ceiling,
            summarize_path: None,
        }
    }

    /// Enable the summarization endpoint at the specified path.
    pub fn with_summarize(mut self, path: impl Into<String>) -> Self {
        self.summarize_path = Some(path.into());
        self
    }

    /// Build the router with all configured endpoints.
    ///
    /// Returns an axum `Router` that can be served directly or merged
    /// with other routes.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::NoEndpoints`] if no endpoints were configured.
    /// Call `.with_summarize()` before `.build()`.
    pub fn build(self) -> Result<Router, BuildError> {
        let Some(summarize_path) = self.summarize_path else {
            return Err(BuildError::NoEndpoints);
        };

        let state = AppState::from_arc(self.summarizer, self.ceiling);

        use crate::summarize::summarize_handler;
        use axum::routing::post;

        let router = Router::new().route(&summarize_path, post(summarize_handler));

        Ok(router.with_state(state))
    }

    /// Build the router and nest it under a prefix path.
    ///
    /// This is useful when integrating with an existing application router.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::NoEndpoints`] if no endpoints were configured.
    pub fn build_nested(self, prefix: impl Into<String>) -> Result<Router, BuildError> {
        Ok(Router::new().nest(&prefix.into(), self.build()?))
    }
}

#[cfg(test)]
#[path = "router_tests.rs"]
mod tests;
