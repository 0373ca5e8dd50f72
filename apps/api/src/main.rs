mod config;
mod conversation;
mod errors;
mod llm_client;
mod models;
mod questions;
mod routes;
mod state;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::Mutex;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::conversation::ConversationController;
use crate::llm_client::LlmClient;
use crate::questions::LlmQuestionGenerator;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::ProfileStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Scout API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the candidate store
    let store = ProfileStore::open(&config.store_path);
    info!(
        "Candidate store ready at {} ({} records)",
        config.store_path,
        store.len()
    );

    // Initialize LLM client + question generator
    let llm = LlmClient::new(config.anthropic_api_key.clone(), config.llm_model.clone());
    info!("LLM client initialized (model: {})", llm.model());
    let generator = Arc::new(LlmQuestionGenerator::new(llm));

    // The controller owns the session; handlers only hold a reference
    let controller = ConversationController::new(generator, store);

    let state = AppState {
        controller: Arc::new(Mutex::new(controller)),
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
