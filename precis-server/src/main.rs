//! precis server binary.
//!
//! Run with:
//! ```sh
//! OPENAI_API_KEY=sk-... cargo run -p precis-server
//! ```
//!
//! Test with curl:
//! ```sh
//! curl -X POST http://localhost:3000/api/summarize \
//!   -H "Content-Type: application/json" \
//!   -d '{"text": "Some long text to summarize...", "temperature": 0.3}'
//! ```

use anyhow::Context as _;
use precis_core::Summarizer;
use precis_openai_sdk::OpenAi;
use precis_server::{PrecisRouter, ServerConfig};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .compact()
        .init();

    let config = ServerConfig::from_env()?;

    // Credential validated here, at one well-defined point, before the
    // server accepts any traffic.
    let client = OpenAi::from_env().context("provider client configuration failed")?;

    let mut summarizer = Summarizer::new(client);
    if let Some(tier) = config.model_override {
        tracing::info!(model = %tier, "model tier pinned by configuration");
        summarizer = summarizer.with_tier_override(tier);
    }

    let app = PrecisRouter::new(summarizer, config.max_cost)
        .with_summarize("/api/summarize")
        .build()?
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;

    tracing::info!(
        addr = %config.bind,
        max_cost = config.max_cost.amount(),
        "precis server listening"
    );

    axum::serve(listener, app).await?;

    Ok(())
}
