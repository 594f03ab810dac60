//! Reference resolution for areas.
//!
//! An area's `tables` resolve to live tables (in the order the area lists
//! them), each table's `order` resolves to the live order's status, and
//! `outlet_id` resolves to the live outlet. Lookups are batched per level,
//! so populating N areas costs three repository calls, not 3N.

use std::collections::{HashMap, HashSet};

use floorplan_domain::area::{Area, PopulatedArea};
use floorplan_domain::error::FloorplanError;
use floorplan_domain::id::{OrderId, OutletId, TableId};
use floorplan_domain::order::OrderSummary;
use floorplan_domain::outlet::Outlet;
use floorplan_domain::table::Table;

use crate::ports::{OrderRepository, OutletRepository, TableRepository};

/// Resolves area references through the collaborator ports.
pub struct AreaPopulator<TR, OR, UR> {
    tables: TR,
    orders: OR,
    outlets: UR,
}

impl<TR, OR, UR> AreaPopulator<TR, OR, UR>
where
    TR: TableRepository,
    OR: OrderRepository,
    UR: OutletRepository,
{
    pub fn new(tables: TR, orders: OR, outlets: UR) -> Self {
        Self {
            tables,
            orders,
            outlets,
        }
    }

    /// Populate a single area.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from any collaborator repository.
    pub async fn populate(&self, area: Area) -> Result<PopulatedArea, FloorplanError> {
        let mut populated = self.populate_all(vec![area]).await?;
        Ok(populated.remove(0))
    }

    /// Populate several areas, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from any collaborator repository.
    pub async fn populate_all(
        &self,
        areas: Vec<Area>,
    ) -> Result<Vec<PopulatedArea>, FloorplanError> {
        let tables = self.live_tables(&areas).await?;
        let orders = self.live_orders(tables.values()).await?;
        let outlets = self.live_outlets(&areas).await?;

        let populated = areas
            .into_iter()
            .map(|area| {
                let area_tables = area
                    .tables
                    .iter()
                    .filter_map(|id| tables.get(id))
                    .map(|table| {
                        let order = table.order.and_then(|id| orders.get(&id).cloned());
                        table.clone().populate(order)
                    })
                    .collect();
                let outlet = area.outlet_id.and_then(|id| outlets.get(&id).cloned());
                area.populate(outlet, area_tables)
            })
            .collect();

        Ok(populated)
    }

    async fn live_tables(
        &self,
        areas: &[Area],
    ) -> Result<HashMap<TableId, Table>, FloorplanError> {
        let ids = distinct(areas.iter().flat_map(|area| area.tables.iter().copied()));
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        let found = self.tables.get_by_ids(&ids).await?;
        Ok(found
            .into_iter()
            .filter(|table| table.del_status.is_live())
            .map(|table| (table.id, table))
            .collect())
    }

    async fn live_orders<'a>(
        &self,
        tables: impl Iterator<Item = &'a Table>,
    ) -> Result<HashMap<OrderId, OrderSummary>, FloorplanError> {
        let ids = distinct(tables.filter_map(|table| table.order));
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        let found = self.orders.get_by_ids(&ids).await?;
        Ok(found
            .into_iter()
            .filter(|order| order.del_status.is_live())
            .map(|order| (order.id, order.summary()))
            .collect())
    }

    async fn live_outlets(
        &self,
        areas: &[Area],
    ) -> Result<HashMap<OutletId, Outlet>, FloorplanError> {
        let ids = distinct(areas.iter().filter_map(|area| area.outlet_id));
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        let found = self.outlets.get_by_ids(&ids).await?;
        Ok(found
            .into_iter()
            .filter(|outlet| outlet.del_status.is_live())
            .map(|outlet| (outlet.id, outlet))
            .collect())
    }
}

fn distinct<T>(ids: impl Iterator<Item = T>) -> Vec<T>
where
    T: Copy + Eq + std::hash::Hash,
{
    let mut seen = HashSet::new();
    ids.filter(|id| seen.insert(*id)).collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use floorplan_domain::area::NewArea;
    use floorplan_domain::order::Order;
    use floorplan_domain::status::DelStatus;
    use std::future::Future;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    pub(crate) struct InMemoryTableRepo {
        store: Arc<Mutex<Vec<Table>>>,
        pub(crate) lookups: Arc<Mutex<usize>>,
    }

    impl TableRepository for InMemoryTableRepo {
        fn create(&self, table: Table) -> impl Future<Output = Result<Table, FloorplanError>> + Send {
            self.store.lock().unwrap().push(table.clone());
            async { Ok(table) }
        }

        fn get_by_ids(
            &self,
            ids: &[TableId],
        ) -> impl Future<Output = Result<Vec<Table>, FloorplanError>> + Send {
            *self.lookups.lock().unwrap() += 1;
            let store = self.store.lock().unwrap();
            let result: Vec<Table> = store
                .iter()
                .filter(|table| ids.contains(&table.id))
                .cloned()
                .collect();
            async { Ok(result) }
        }
    }

    #[derive(Clone, Default)]
    pub(crate) struct InMemoryOrderRepo {
        store: Arc<Mutex<Vec<Order>>>,
    }

    impl OrderRepository for InMemoryOrderRepo {
        fn create(&self, order: Order) -> impl Future<Output = Result<Order, FloorplanError>> + Send {
            self.store.lock().unwrap().push(order.clone());
            async { Ok(order) }
        }

        fn get_by_ids(
            &self,
            ids: &[OrderId],
        ) -> impl Future<Output = Result<Vec<Order>, FloorplanError>> + Send {
            let store = self.store.lock().unwrap();
            let result: Vec<Order> = store
                .iter()
                .filter(|order| ids.contains(&order.id))
                .cloned()
                .collect();
            async { Ok(result) }
        }
    }

    #[derive(Clone, Default)]
    pub(crate) struct InMemoryOutletRepo {
        store: Arc<Mutex<Vec<Outlet>>>,
    }

    impl OutletRepository for InMemoryOutletRepo {
        fn create(
            &self,
            outlet: Outlet,
        ) -> impl Future<Output = Result<Outlet, FloorplanError>> + Send {
            self.store.lock().unwrap().push(outlet.clone());
            async { Ok(outlet) }
        }

        fn get_by_ids(
            &self,
            ids: &[OutletId],
        ) -> impl Future<Output = Result<Vec<Outlet>, FloorplanError>> + Send {
            let store = self.store.lock().unwrap();
            let result: Vec<Outlet> = store
                .iter()
                .filter(|outlet| ids.contains(&outlet.id))
                .cloned()
                .collect();
            async { Ok(result) }
        }
    }

    struct Fixture {
        tables: InMemoryTableRepo,
        orders: InMemoryOrderRepo,
        outlets: InMemoryOutletRepo,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                tables: InMemoryTableRepo::default(),
                orders: InMemoryOrderRepo::default(),
                outlets: InMemoryOutletRepo::default(),
            }
        }

        fn populator(
            &self,
        ) -> AreaPopulator<InMemoryTableRepo, InMemoryOrderRepo, InMemoryOutletRepo> {
            AreaPopulator::new(
                self.tables.clone(),
                self.orders.clone(),
                self.outlets.clone(),
            )
        }
    }

    fn area(tables: Vec<TableId>, outlet_id: Option<OutletId>) -> Area {
        Area::new(NewArea {
            area_name: "Hall".to_string(),
            outlet_id,
            tables,
        })
    }

    #[tokio::test]
    async fn should_skip_deleted_and_unknown_tables() {
        let fx = Fixture::new();
        let live = Table::builder().table_name("T1").build();
        let deleted = Table::builder()
            .table_name("T2")
            .del_status(DelStatus::Deleted)
            .build();
        fx.tables.create(live.clone()).await.unwrap();
        fx.tables.create(deleted.clone()).await.unwrap();

        let populated = fx
            .populator()
            .populate(area(vec![deleted.id, TableId::new(), live.id], None))
            .await
            .unwrap();

        assert_eq!(populated.tables.len(), 1);
        assert_eq!(populated.tables[0].id, live.id);
    }

    #[tokio::test]
    async fn should_keep_area_table_order() {
        let fx = Fixture::new();
        let first = Table::builder().table_name("A").build();
        let second = Table::builder().table_name("B").build();
        fx.tables.create(first.clone()).await.unwrap();
        fx.tables.create(second.clone()).await.unwrap();

        let populated = fx
            .populator()
            .populate(area(vec![second.id, first.id], None))
            .await
            .unwrap();

        let names: Vec<&str> = populated
            .tables
            .iter()
            .map(|t| t.table_name.as_str())
            .collect();
        assert_eq!(names, vec!["B", "A"]);
    }

    #[tokio::test]
    async fn should_resolve_live_order_status_only() {
        let fx = Fixture::new();
        let running = Order::new("Running");
        let mut cancelled = Order::new("Cancelled");
        cancelled.del_status = DelStatus::Deleted;
        fx.orders.create(running.clone()).await.unwrap();
        fx.orders.create(cancelled.clone()).await.unwrap();

        let busy = Table::builder().table_name("T1").order(running.id).build();
        let stale = Table::builder().table_name("T2").order(cancelled.id).build();
        fx.tables.create(busy.clone()).await.unwrap();
        fx.tables.create(stale.clone()).await.unwrap();

        let populated = fx
            .populator()
            .populate(area(vec![busy.id, stale.id], None))
            .await
            .unwrap();

        assert_eq!(
            populated.tables[0].order.as_ref().unwrap().order_status,
            "Running"
        );
        assert!(populated.tables[1].order.is_none());
    }

    #[tokio::test]
    async fn should_leave_outlet_null_when_outlet_deleted() {
        let fx = Fixture::new();
        let mut outlet = Outlet::new("Old Town");
        outlet.del_status = DelStatus::Deleted;
        fx.outlets.create(outlet.clone()).await.unwrap();

        let populated = fx
            .populator()
            .populate(area(vec![], Some(outlet.id)))
            .await
            .unwrap();

        assert!(populated.outlet_id.is_none());
    }

    #[tokio::test]
    async fn should_embed_live_outlet() {
        let fx = Fixture::new();
        let outlet = Outlet::new("Harbour").with_address("1 Quay St");
        fx.outlets.create(outlet.clone()).await.unwrap();

        let populated = fx
            .populator()
            .populate(area(vec![], Some(outlet.id)))
            .await
            .unwrap();

        assert_eq!(populated.outlet_id, Some(outlet));
    }

    #[tokio::test]
    async fn should_batch_table_lookups_across_areas() {
        let fx = Fixture::new();
        let shared = Table::builder().table_name("Shared").build();
        fx.tables.create(shared.clone()).await.unwrap();

        let populated = fx
            .populator()
            .populate_all(vec![area(vec![shared.id], None), area(vec![shared.id], None)])
            .await
            .unwrap();

        assert_eq!(populated.len(), 2);
        assert!(populated.iter().all(|a| a.tables.len() == 1));
        assert_eq!(*fx.tables.lookups.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn should_not_query_tables_when_no_area_has_any() {
        let fx = Fixture::new();
        fx.populator()
            .populate_all(vec![area(vec![], None)])
            .await
            .unwrap();
        assert_eq!(*fx.tables.lookups.lock().unwrap(), 0);
    }
}
