mod config;
mod errors;
mod json_value;
mod llm_client;
mod plans;
mod roadmap;
mod routes;
mod scanner;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::{GeminiClient, StructuredModel};
use crate::routes::build_router;
use crate::scanner::ScannerClient;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Roadmap API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the schema-constrained model client
    let gemini = GeminiClient::new(&config)?;
    info!(
        "LLM client initialized (model: {}, max_output_tokens: {}, timeout: {}s)",
        gemini.model_name(),
        config.max_output_tokens,
        config.llm_timeout_secs
    );
    let model: Arc<dyn StructuredModel> = Arc::new(gemini);

    // Initialize the resume scanner proxy, if configured
    let scanner = match &config.resume_scanner_url {
        Some(url) => {
            info!(
                "Resume scanner proxy enabled: {url} (timeout: {}s, max upload: {} bytes)",
                config.resume_scanner_timeout_secs, config.resume_max_upload_bytes
            );
            Some(ScannerClient::new(
                url.clone(),
                config.resume_scanner_timeout_secs,
            )?)
        }
        None => {
            warn!("RESUME_SCANNER_URL not set; /resume/scan will answer 503");
            None
        }
    };

    let state = AppState {
        model,
        scanner,
        max_upload_bytes: config.resume_max_upload_bytes,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict to the front-end origin once it is configurable

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
