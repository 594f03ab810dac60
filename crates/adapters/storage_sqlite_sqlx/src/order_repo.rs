//! `SQLite` implementation of [`OrderRepository`].

use std::future::Future;
use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use floorplan_app::ports::OrderRepository;
use floorplan_domain::error::FloorplanError;
use floorplan_domain::id::OrderId;
use floorplan_domain::order::Order;
use floorplan_domain::status::DelStatus;

use crate::error::StorageError;

struct Wrapper(Order);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let order_status: String = row.try_get("order_status")?;
        let del_status: String = row.try_get("del_status")?;

        let id = OrderId::from_str(&id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let del_status =
            DelStatus::from_str(&del_status).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(Order {
            id,
            order_status,
            del_status,
        }))
    }
}

const INSERT: &str = "INSERT INTO orders (id, order_status, del_status) VALUES (?, ?, ?)";
const SELECT_BY_IDS: &str = "SELECT * FROM orders WHERE id IN (SELECT value FROM json_each(?))";

/// `SQLite`-backed order repository.
pub struct SqliteOrderRepository {
    pool: SqlitePool,
}

impl SqliteOrderRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl OrderRepository for SqliteOrderRepository {
    fn create(&self, order: Order) -> impl Future<Output = Result<Order, FloorplanError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(order.id.to_string())
                .bind(&order.order_status)
                .bind(order.del_status.as_str())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(order)
        }
    }

    fn get_by_ids(
        &self,
        ids: &[OrderId],
    ) -> impl Future<Output = Result<Vec<Order>, FloorplanError>> + Send {
        let pool = self.pool.clone();
        let ids = serde_json::to_string(ids);
        async move {
            let ids = ids.map_err(StorageError::from)?;
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_IDS)
                .bind(ids)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }
}
