//! # Inventory API Server
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Client ───► HTTP (8080) ───► Router ───► Handlers ───► SQLite        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Startup
//! 1. Load `.env` (if present) and initialise logging
//! 2. Read [`ApiConfig`] from the environment
//! 3. Open the database and apply migrations
//! 4. Serve until Ctrl+C / SIGTERM, then drain in-flight requests

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use inventory_api::{create_router, ApiConfig, AppState};
use inventory_db::{Database, DbConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is normal in production
    let dotenv = dotenvy::dotenv();

    init_tracing();

    if let Err(e) = dotenv {
        if !e.not_found() {
            warn!(error = %e, "Failed to read .env file");
        }
    }

    info!("Starting Inventory API v{}", env!("CARGO_PKG_VERSION"));

    let config = ApiConfig::load().context("Failed to load configuration")?;
    info!(
        address = %config.bind_address(),
        prefix = %config.prefix,
        database = %config.database_path,
        "Configuration loaded"
    );

    let db_config = DbConfig::new(&config.database_path)
        .max_connections(config.db_max_connections)
        .acquire_timeout(config.db_acquire_timeout);
    let db = Database::new(db_config)
        .await
        .context("Failed to open database")?;
    info!("Database ready");

    let app = create_router(AppState::new(db.clone()), &config.prefix);

    let listener = TcpListener::bind(config.bind_address())
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_address()))?;
    info!(address = %config.bind_address(), "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    db.close().await;
    info!("Server shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber.
///
/// Log level is controlled by `RUST_LOG`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,inventory=debug,sqlx=warn,tower_http=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
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

    info!("Shutdown signal received, starting graceful shutdown...");
}
