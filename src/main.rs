//! rustlog-core: a small HTTP service that serves `.txt` log files from a
//! single configured directory, as rendered pages and as JSON.

mod api;
mod app_state;
mod config;
mod core;
mod domain;
mod errors;
mod routes;

use std::net::{Ipv4Addr, SocketAddr};

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::app_state::build_app_state;
use crate::config::AppConfig;
use crate::routes::app_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // The guard must outlive the server so buffered log lines are flushed.
    let _guard = init_tracing();

    let config = AppConfig::from_env()?;

    // Create the logs directory on startup if absent. This is the only write
    // the process ever performs there.
    std::fs::create_dir_all(&config.logs_dir)
        .with_context(|| format!("creating logs directory {}", config.logs_dir.display()))?;

    let state = build_app_state(&config);
    let app = app_router().with_state(state);

    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;

    tracing::info!("log reader listening on http://{}", listener.local_addr()?);
    tracing::info!("serving .txt files from {}", config.logs_dir.display());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Log to stdout, or to a daily-rolling file when `RUSTLOG_FILE_LOG_DIR` is
/// set. Filtering comes from `RUST_LOG`, defaulting to `info`.
fn init_tracing() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match std::env::var("RUSTLOG_FILE_LOG_DIR") {
        Ok(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "rustlog-core.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Some(guard)
        }
        Err(_) => {
            tracing_subscriber::fmt().with_env_filter(filter).init();
            None
        }
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to install ctrl-c handler: {err}");
        return;
    }
    tracing::info!("shutdown signal received");
}
