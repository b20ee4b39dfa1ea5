//! helmdemo server
//!
//! - `GET /`        : greeting, counted on `http_requests_total` and `index_requests_total`
//! - `GET /metrics` : Prometheus text exposition
//! - `GET /healthz` : liveness, `GET /readyz` : readiness
//!
//! Usage: `helmdemo-server [config.yaml]` (defaults to `helmdemo.yaml` if present).

use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use helmdemo_core::error::{DemoError, Result};
use helmdemo_server::{app_state::AppState, config, server};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Tracing may not be installed yet (config errors), so go to stderr too.
            eprintln!("helmdemo-server: {e}");
            tracing::error!(error = %e, "server exited with error");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let cfg = match std::env::args().nth(1) {
        Some(path) => config::load_from_file(path)?,
        None => config::load_or_default(config::DEFAULT_CONFIG_PATH)?,
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.log.filter));
    fmt().with_env_filter(filter).init();

    let listen = cfg.server.listen_addr()?;
    let state = AppState::new(cfg)?;

    tracing::info!(%listen, "helmdemo-server starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| DemoError::Internal(format!("bind {listen} failed: {e}")))?;

    server::serve(listener, state, shutdown_signal()).await?;

    tracing::info!("helmdemo-server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to listen for Ctrl+C");
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
                tracing::warn!(error = %e, "failed to install SIGTERM handler");
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
    tracing::info!("signal received, starting graceful shutdown");
}
