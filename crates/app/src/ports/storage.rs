//! Storage port — repository traits for persistence.
//!
//! Every call is expected to be atomic for the single record it touches.
//! Nothing here composes several calls into a transaction.

use std::future::Future;

use floorplan_domain::area::{Area, AreaPatch};
use floorplan_domain::error::FloorplanError;
use floorplan_domain::id::{AreaId, OrderId, OutletId, TableId};
use floorplan_domain::order::Order;
use floorplan_domain::outlet::Outlet;
use floorplan_domain::table::Table;

/// Repository for persisting and querying [`Area`]s.
pub trait AreaRepository {
    /// Insert a new area.
    fn create(&self, area: Area) -> impl Future<Output = Result<Area, FloorplanError>> + Send;

    /// Find a live area whose name is exactly `area_name`.
    fn find_live_by_name(
        &self,
        area_name: &str,
    ) -> impl Future<Output = Result<Option<Area>, FloorplanError>> + Send;

    /// Get an area by id, whatever its `del_status`.
    fn get_by_id(
        &self,
        id: AreaId,
    ) -> impl Future<Output = Result<Option<Area>, FloorplanError>> + Send;

    /// Get every live area, in insertion order.
    fn get_live(&self) -> impl Future<Output = Result<Vec<Area>, FloorplanError>> + Send;

    /// Apply `patch` to the area with `id` in one atomic step and return the
    /// updated record, or `None` when no area has that id.
    fn find_and_update(
        &self,
        id: AreaId,
        patch: AreaPatch,
    ) -> impl Future<Output = Result<Option<Area>, FloorplanError>> + Send;

    /// Flip the area with `id` to `Deleted` in one atomic step, leaving every
    /// other field as stored. Returns the updated record, or `None` when no
    /// area has that id.
    fn mark_deleted(
        &self,
        id: AreaId,
    ) -> impl Future<Output = Result<Option<Area>, FloorplanError>> + Send;
}

/// Repository for the tables areas reference.
pub trait TableRepository {
    /// Insert a new table.
    fn create(&self, table: Table) -> impl Future<Output = Result<Table, FloorplanError>> + Send;

    /// Get the tables with the given ids. Unknown ids are skipped; the result
    /// order is unspecified.
    fn get_by_ids(
        &self,
        ids: &[TableId],
    ) -> impl Future<Output = Result<Vec<Table>, FloorplanError>> + Send;
}

/// Repository for the orders tables reference.
pub trait OrderRepository {
    /// Insert a new order.
    fn create(&self, order: Order) -> impl Future<Output = Result<Order, FloorplanError>> + Send;

    /// Get the orders with the given ids. Unknown ids are skipped.
    fn get_by_ids(
        &self,
        ids: &[OrderId],
    ) -> impl Future<Output = Result<Vec<Order>, FloorplanError>> + Send;
}

/// Repository for the outlets areas belong to.
pub trait OutletRepository {
    /// Insert a new outlet.
    fn create(&self, outlet: Outlet)
    -> impl Future<Output = Result<Outlet, FloorplanError>> + Send;

    /// Get the outlets with the given ids. Unknown ids are skipped.
    fn get_by_ids(
        &self,
        ids: &[OutletId],
    ) -> impl Future<Output = Result<Vec<Outlet>, FloorplanError>> + Send;
}
