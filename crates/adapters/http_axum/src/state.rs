//! Shared application state for axum handlers.

use std::sync::Arc;

use floorplan_app::ports::{AreaRepository, OrderRepository, OutletRepository, TableRepository};
use floorplan_app::services::area_service::AreaService;

/// Application state shared across all axum handlers.
///
/// Generic over the area repository and the three collaborator repositories
/// to avoid dynamic dispatch. `Clone` is implemented manually so the
/// underlying types themselves do not need to be `Clone` — only the `Arc`
/// wrapper is cloned.
pub struct AppState<AR, TR, OR, UR> {
    /// Area CRUD service.
    pub area_service: Arc<AreaService<AR, TR, OR, UR>>,
}

impl<AR, TR, OR, UR> Clone for AppState<AR, TR, OR, UR> {
    fn clone(&self) -> Self {
        Self {
            area_service: Arc::clone(&self.area_service),
        }
    }
}

impl<AR, TR, OR, UR> AppState<AR, TR, OR, UR>
where
    AR: AreaRepository + Send + Sync + 'static,
    TR: TableRepository + Send + Sync + 'static,
    OR: OrderRepository + Send + Sync + 'static,
    UR: OutletRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(area_service: AreaService<AR, TR, OR, UR>) -> Self {
        Self {
            area_service: Arc::new(area_service),
        }
    }
}
