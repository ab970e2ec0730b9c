mod analysis;
mod config;
mod errors;
mod llm_client;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::orchestrator::Analyzer;
use crate::analysis::store::ResultStore;
use crate::config::Config;
use crate::llm_client::GeminiClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CV Analyzer API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize model client. The credential is handed over explicitly here and nowhere else.
    let llm = GeminiClient::with_base_url(
        config.gemini_api_key.clone(),
        config.gemini_model.clone(),
        config.gemini_api_url.clone(),
    )?;
    info!("LLM client initialized (model: {})", llm.model());

    let analyzer = Analyzer::new(Arc::new(llm));

    let store = ResultStore::new(config.results_path.clone());
    info!("Result store at {}", store.path().display());

    let state = AppState {
        analyzer: Arc::new(analyzer),
        store: Arc::new(store),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the dashboard has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
