mod chart;
mod config;
mod errors;
mod llm_client;
mod mailer;
mod report;
mod routes;
mod state;
mod store;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::mailer::EmailClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::ReadingStore;

/// Default log directive when `RUST_LOG` is unset. Event targets carry the
/// bin crate name (`api`), not the package name, so the directive must too.
fn default_filter_directive(level: &str) -> String {
    format!("{}={}", env!("CARGO_CRATE_NAME"), level)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter_directive(&config.rust_log))),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Soulmate API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the flat-file reading store
    let store = ReadingStore::new(&config.readings_dir)?;
    info!("Reading store at '{}'", config.readings_dir);

    // Initialize external service clients
    let llm = LlmClient::new(config.openai_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::CHAT_MODEL);

    let mailer = EmailClient::new(config.sendgrid_api_key.clone(), config.from_email.clone());
    info!("Email client initialized (from: {})", config.from_email);

    // Build app state
    let state = AppState { llm, mailer, store };

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
