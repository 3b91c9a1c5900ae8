//! Main entry point for the storefront backend.
//!
//! This file loads configuration, initializes logging and the database pool,
//! builds the Axum router and serves it until a shutdown signal arrives.

mod api;
mod auth;
mod config;
mod database;
mod errors;
mod middleware;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use adapters::MySqlStore;
use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::state::AppState;

/// Used when `RUST_LOG` is unset. Covers the binary, the store library and
/// the HTTP trace layer.
const DEFAULT_LOG_FILTER: &str = "storefront=info,adapters=info,tower_http=debug";

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = Config::from_env().context("loading configuration")?;

    let pool = database::connect(&config.database)
        .await
        .context("connecting to database")?;
    let store = MySqlStore::new(pool.clone());
    store.ensure_schema().await.context("preparing accounts table")?;

    let state = AppState::new(Arc::new(store), &config.auth).context("initializing auth")?;
    let app = api::router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("shut down cleanly");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
