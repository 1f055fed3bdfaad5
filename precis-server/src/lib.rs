//! HTTP surface for the precis summarization service.
//!
//! This crate exposes one endpoint, `POST /api/summarize`, which validates
//! client input, enforces the per-request cost ceiling before and after the
//! provider call, and returns either a [`precis_core::SummaryResponse`] or
//! a JSON error envelope.
//!
//! # Example
//!
//! ```rust,no_run
//! use precis_core::{CostCeiling, Summarizer};
//! use precis_openai_sdk::OpenAi;
//! use precis_server::PrecisRouter;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let summarizer = Summarizer::new(OpenAi::from_env()?);
//!
//! let app = PrecisRouter::new(summarizer, CostCeiling::default())
//!     .with_summarize("/api/summarize")
//!     .build()?;
//!
//! // Serve with axum
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod router;
pub(crate) mod state;
pub(crate) mod summarize;

// Re-exports
pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, BuildError};
pub use router::PrecisRouter;
