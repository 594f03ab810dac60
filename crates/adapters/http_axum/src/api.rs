//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod areas;

use axum::Router;
use axum::routing::get;

use floorplan_app::ports::{AreaRepository, OrderRepository, OutletRepository, TableRepository};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<AR, TR, OR, UR>() -> Router<AppState<AR, TR, OR, UR>>
where
    AR: AreaRepository + Send + Sync + 'static,
    TR: TableRepository + Send + Sync + 'static,
    OR: OrderRepository + Send + Sync + 'static,
    UR: OutletRepository + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/areas",
            get(areas::list::<AR, TR, OR, UR>).post(areas::create::<AR, TR, OR, UR>),
        )
        .route(
            "/areas/{id}",
            get(areas::get::<AR, TR, OR, UR>)
                .put(areas::update::<AR, TR, OR, UR>)
                .patch(areas::update::<AR, TR, OR, UR>)
                .delete(areas::delete::<AR, TR, OR, UR>),
        )
}
