mod config;
mod documents;
mod errors;
mod llm_client;
mod routes;
mod screening;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::documents::PdfExtractor;
use crate::routes::build_router;
use crate::screening::summarizer::build_summarizer;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Recruitment Copilot API v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Defaults: top_n={} threshold={}",
        config.top_n, config.score_threshold
    );

    // Narratives are optional; scoring works without them.
    let summarizer = match build_summarizer(&config) {
        Ok(summarizer) => {
            info!("Narrative summaries enabled (model: {})", config.summarizer_model);
            Some(summarizer)
        }
        Err(e) => {
            warn!("Narrative summaries disabled: {e}");
            None
        }
    };

    let state = AppState {
        config: config.clone(),
        extractor: Arc::new(PdfExtractor),
        summarizer,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the frontend host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
