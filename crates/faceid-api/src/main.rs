//! FaceID attendance API server entry point.

use std::error::Error;
use std::sync::Arc;

use faceid_api::build_router;
use faceid_api::config::AppConfig;
use faceid_api::state::AppState;
use faceid_core::clock::SystemClock;
use tokio::net::TcpListener;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_tracing(release: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if release {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// Resolves on Ctrl-C or SIGTERM, then cancels `shutdown` so that requests
/// still waiting on a repository fail fast.
async fn shutdown_signal(shutdown: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Stopping server");
    shutdown.cancel();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Read configuration from environment.
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            init_tracing(false);
            error!(error = %e, "invalid configuration");
            return Err(e.into());
        }
    };

    init_tracing(config.release);

    info!("Starting FaceID attendance API server");

    // Build application state.
    let shutdown = CancellationToken::new();
    let app_state = AppState::new(Arc::new(SystemClock), config.update_policy)
        .with_shutdown(shutdown.clone())
        .with_request_timeout(config.request_timeout);

    let app = build_router(app_state);

    // Start server.
    let listener = match TcpListener::bind(config.bind_addr()).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(error = %e, host = %config.host, port = config.port, "failed to bind");
            return Err(e.into());
        }
    };
    let addr = listener.local_addr()?;
    info!(
        %addr,
        update_policy = %config.update_policy,
        request_timeout = ?config.request_timeout,
        "Running server on http://{addr}"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown))
        .await?;

    info!("Server stopped");

    Ok(())
}
