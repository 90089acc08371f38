use anyhow::{Context, Result};
use product_cart_rust::cart::AppState;
use product_cart_rust::catalog::Catalog;
use product_cart_rust::config::AppConfig;
use product_cart_rust::router::create_app_router;
use product_cart_rust::telemetry;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load config and initialize logging before any other operations
    let config = AppConfig::load()?;
    telemetry::init(&config.logging);

    let catalog = Catalog::load(config.catalog.path.as_deref())?;
    info!(
        products = catalog.len(),
        source = ?config.catalog.path,
        "catalog loaded"
    );

    // Initialize application state
    let state = Arc::new(AppState::new(catalog));

    // Build application router with all routes and middleware
    let app = create_app_router(state, config.server.request_timeout());

    let addr = config.server.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated unexpectedly")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to listen for shutdown signal");
    }
}
