//! Gas Event Tracker - Binary Entry Point
//!
//! This is the main entry point for the gas-events-server binary.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use gas_events::api::http::create_router;
use gas_events::config::Config;
use gas_events::store::EventStore;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();

    // An unreadable or undecodable backing file is fatal: the process must
    // not serve traffic from a sequence it could not load.
    let store = match EventStore::open(&config.events_file) {
        Ok(store) => Arc::new(store),
        Err(err) => {
            tracing::error!(error = %err, path = %config.events_file.display(), "failed to open event store");
            std::process::exit(1);
        }
    };

    let app = create_router(store, &config.static_dir);

    let listener = match tokio::net::TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!(error = %err, addr = %config.bind_addr, "failed to bind");
            std::process::exit(1);
        }
    };

    tracing::info!(addr = %config.bind_addr, "server starting");

    if let Err(err) = axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    {
        tracing::error!(error = %err, "server error");
        std::process::exit(1);
    }
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("shutdown signal received");
    }
}
