mod api;
mod catalog;
mod config;

use crate::api::AppState;
use crate::catalog::CityCatalog;
use crate::config::AppConfig;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = AppConfig::load()?;

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("🚀 Starting Cafe Lookup API Server");
    info!("📋 Configuration loaded");
    info!("   - Server: {}:{}", config.server.host, config.server.port);

    // Load catalog
    let catalog = match &config.catalog.path {
        Some(path) => CityCatalog::load(path)?,
        None => {
            info!("📂 No catalog path configured, using built-in seed data");
            CityCatalog::seed()
        }
    };
    info!(
        "✅ Catalog ready ({} cities, {} cafes)",
        catalog.city_count(),
        catalog.cafe_count()
    );

    let state = AppState {
        catalog: Arc::new(catalog),
    };

    let app = api::router(state);

    // Start server
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("🌐 Server listening on http://{}", addr);
    info!("");
    info!("📡 Available endpoints:");
    info!("   GET  /health           - Health check");
    info!("   GET  /cafe             - Cafes by city (?city=&count=&search=)");
    info!("");
    info!("✨ Server is ready to accept requests!");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Server shutting down gracefully");

    Ok(())
}

/// Graceful shutdown handler
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("🛑 Shutdown signal received");
}
