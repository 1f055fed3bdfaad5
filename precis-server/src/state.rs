//! Application state for the precis server.

use std::sync::Arc;

use precis_core::{CostCeiling, Summarizer};

/// Shared application state.
///
/// Cloned for each request handler. Everything here is read-only after
/// startup: the summarizer wraps the one provider client for the process,
/// and the ceiling is fixed by configuration.
#[derive(Clone)]
pub struct AppState {
    /// The shared summarization client.
    pub summarizer: Arc<Summarizer>,

    /// The per-request cost ceiling.
    pub ceiling: CostCeiling,
}

impl AppState {
    /// Create new application state from an Arc<Summarizer>.
    pub fn from_arc(summarizer: Arc<Summarizer>, ceiling: CostCeiling) -> Self {
        Self {
            summarizer,
            ceiling,
        }
    }
}
