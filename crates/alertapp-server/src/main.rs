//! Alertapp server binary.

use std::process::ExitCode;
use std::sync::Arc;

use alertapp_server::{AlertServer, Args};
use alertapp_store::{DemoSeeder, InMemoryAlertStore};
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Args::parse().into_config();
    let bind_addr = config.bind_addr;

    let store = Arc::new(InMemoryAlertStore::new());
    if config.demo {
        DemoSeeder::new().seed(store.as_ref());
    }

    info!("Starting alertapp on http://{}/", bind_addr);
    if let Some(dir) = &config.static_dir {
        info!("  Static files from:  {}", dir.display());
    }

    let server = AlertServer::new(config, store);

    if let Err(e) = server.serve_with_shutdown(bind_addr, shutdown_signal()).await {
        error!("Server error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
