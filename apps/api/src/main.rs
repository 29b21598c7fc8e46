mod config;
mod db;
mod design;
mod errors;
mod images;
mod kit;
mod llm_client;
mod models;
mod routes;
mod state;
mod style;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::images::{ImageLookupCache, UnsplashSearch};
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::style::build_predictor;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting kitgen v{}", env!("CARGO_PKG_VERSION"));

    // Generation log
    let db = create_pool(&config.database_url).await?;

    // Image lookup: one cache per process, shared through state
    if config.unsplash_api_key.is_none() {
        warn!("UNSPLASH_API_KEY not set; every lookup will use the fallback image");
    }
    let search = UnsplashSearch::new(
        config.unsplash_api_key.clone(),
        Duration::from_millis(config.image_search_timeout_ms),
    )?;
    let images = Arc::new(ImageLookupCache::new(Arc::new(search)));
    info!(
        "Image lookup initialized (timeout: {}ms)",
        config.image_search_timeout_ms
    );

    // LLM client is optional; /suggest fails cleanly without it
    let llm = match &config.gemini_api_key {
        Some(key) => {
            let client = LlmClient::new(key.clone())?;
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Some(client)
        }
        None => {
            warn!("GEMINI_API_KEY not set; suggestions are disabled");
            None
        }
    };

    let style_predictor = build_predictor(&config.style_backend);
    info!("Style predictor: {}", style_predictor.backend());

    let state = AppState {
        db,
        llm,
        images,
        style_predictor,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
