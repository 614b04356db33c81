//! Hello Redis - A minimal greeting HTTP service
//!
//! Exposes a greeting echo, set-name and get-name route backed by an
//! external Redis key-value store, plus liveness/readiness probes.

mod api;
mod config;
mod error;
mod models;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::{create_router, AppState};
use config::Config;
use store::RedisStore;

/// Main entry point for the greeting service.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables (and `.env` if present)
/// 3. Connect to the Redis store (fail fast if unreachable)
/// 4. Create Axum router with all endpoints
/// 5. Start HTTP server on the configured host/port
/// 6. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hello_redis=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Hello Redis greeting service");

    // Load configuration from environment variables
    let config = Config::from_env();
    info!(
        "Configuration loaded: host={}, port={}, redis={}:{}",
        config.server_host, config.server_port, config.redis_host, config.redis_port
    );

    // Connect to the store before binding the listener; the handle is
    // passed explicitly into the application state and lives until
    // shutdown.
    let store = RedisStore::connect(&config.redis_url())
        .await
        .context("failed to connect to the Redis store")?;
    info!("Connected to Redis store");

    let state = AppState::new(Arc::new(store));

    // Create router with all endpoints
    let app = create_router(state);

    // Bind to configured host and port
    let addr: SocketAddr = format!("{}:{}", config.server_host, config.server_port)
        .parse()
        .context("invalid listener address")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("failed to bind HTTP listener")?;
    info!("Server listening on http://{}", addr);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
