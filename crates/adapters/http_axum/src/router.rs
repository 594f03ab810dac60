//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use floorplan_app::ports::{AreaRepository, OrderRepository, OutletRepository, TableRepository};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests the JSON API under `/api` and exposes `/health`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<AR, TR, OR, UR>(state: AppState<AR, TR, OR, UR>) -> Router
where
    AR: AreaRepository + Send + Sync + 'static,
    TR: TableRepository + Send + Sync + 'static,
    OR: OrderRepository + Send + Sync + 'static,
    UR: OutletRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
