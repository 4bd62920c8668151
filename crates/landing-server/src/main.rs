//! Landing Page Server
//!
//! Serves the built WASM frontend with a client-side routing fallback.
//! Form data never reaches this process; submission happens entirely in
//! the browser.

mod config;
mod handlers;

use axum::{Router, routing::get};
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;
use crate::handlers::health_check;

fn build_router(config: &ServerConfig) -> Router {
    // Unknown paths get index.html so /static and /demo resolve client-side
    let frontend = ServeDir::new(&config.static_dir).fallback(ServeFile::new(config.index_file()));

    Router::new()
        .route("/health", get(health_check))
        .fallback_service(frontend)
        .layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment before reading RUST_LOG
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;
    if !config.index_file().exists() {
        tracing::warn!("⚠ {} not found - build the frontend first", config.index_file().display());
    }

    let app = build_router(&config);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;

    tracing::info!("landing page on http://{}", config.bind_addr);
    tracing::info!("  serving {}", config.static_dir.display());
    tracing::info!("  GET /health - Health check");

    axum::serve(listener, app).await?;

    Ok(())
}
