//! Unit Converter Server — server-rendered length, weight, and temperature converter.
//!
//! Main entry point that wires all crates together and starts the server.

use std::time::Duration;

use tokio::sync::watch;
use tracing_subscriber::{EnvFilter, fmt};

use unitconv_api::AppState;
use unitconv_core::config::AppConfig;
use unitconv_core::error::{AppError, ErrorKind};

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from optional files and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("UNITCONV_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Unit Converter v{}", env!("CARGO_PKG_VERSION"));

    let addr = config.bind_address();
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);

    let app = unitconv_api::build_router(AppState::new());

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Io, format!("Failed to bind {}", addr), e))?;

    tracing::info!("Unit Converter running at http://{}", addr);

    // ── Graceful shutdown ────────────────────────────────────────
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, starting graceful shutdown...");
        let _ = shutdown_tx.send(true);
    });

    let mut server = tokio::spawn(async move { server.await });

    tokio::select! {
        result = &mut server => return server_result(result),
        _ = shutdown_rx.changed() => {}
    }

    match tokio::time::timeout(grace, server).await {
        Ok(result) => server_result(result)?,
        Err(_) => tracing::warn!(
            "Open connections still busy after {}s, exiting anyway",
            grace.as_secs()
        ),
    }

    tracing::info!("Unit Converter shut down gracefully");
    Ok(())
}

/// Flatten the server task's join and I/O errors
fn server_result(
    result: Result<std::io::Result<()>, tokio::task::JoinError>,
) -> Result<(), AppError> {
    result
        .map_err(|e| AppError::internal(format!("Server task failed: {}", e)))?
        .map_err(|e| AppError::with_source(ErrorKind::Io, "Server error", e))
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
