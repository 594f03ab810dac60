//! # floorpland — floorplan daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (`floorplan.toml` plus `FLOORPLAN_*` env vars)
//! - Install the `tracing` subscriber
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct repository implementations (adapters)
//! - Construct the area service, injecting repositories via port traits
//! - Build the axum router and serve it until SIGINT/SIGTERM
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use floorplan_adapter_http_axum::state::AppState;
use floorplan_adapter_storage_sqlite_sqlx::{
    SqliteAreaRepository, SqliteOrderRepository, SqliteOutletRepository, SqliteTableRepository,
};
use floorplan_app::services::area_service::AreaService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    // Database
    let db = floorplan_adapter_storage_sqlite_sqlx::Config::new(config.database_url())
        .with_max_connections(config.database.max_connections)
        .build()
        .await?;
    let pool = db.pool().clone();

    // Repositories
    let area_repo = SqliteAreaRepository::new(pool.clone());
    let table_repo = SqliteTableRepository::new(pool.clone());
    let order_repo = SqliteOrderRepository::new(pool.clone());
    let outlet_repo = SqliteOutletRepository::new(pool);

    // Services
    let area_service = AreaService::new(area_repo, table_repo, order_repo, outlet_repo);

    // HTTP
    let app = floorplan_adapter_http_axum::router::build(AppState::new(area_service));

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(address = %bind_addr, "floorpland listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("floorpland stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = until_signal("ctrl-c", tokio::signal::ctrl_c());

    #[cfg(unix)]
    let terminate = until_signal("SIGTERM", async {
        use tokio::signal::unix::{SignalKind, signal};

        signal(SignalKind::terminate())?.recv().await;
        Ok::<(), std::io::Error>(())
    });

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}

/// Resolve once `listener` reports the signal. A listener that fails to
/// install never resolves, so the server keeps running.
async fn until_signal<F>(name: &str, listener: F)
where
    F: Future<Output = std::io::Result<()>>,
{
    if let Err(err) = listener.await {
        tracing::error!(error = %err, signal = name, "failed to listen for signal");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::until_signal;

    #[tokio::test]
    async fn should_resolve_when_signal_received() {
        let waited = tokio::time::timeout(
            Duration::from_millis(200),
            until_signal("test", async { Ok::<(), std::io::Error>(()) }),
        )
        .await;
        assert!(waited.is_ok());
    }

    #[tokio::test]
    async fn should_keep_waiting_when_listener_fails_to_install() {
        let waited = tokio::time::timeout(
            Duration::from_millis(50),
            until_signal("test", async { Err(std::io::Error::other("no handler")) }),
        )
        .await;
        assert!(waited.is_err());
    }
}
