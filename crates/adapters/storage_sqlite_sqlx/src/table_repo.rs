//! `SQLite` implementation of [`TableRepository`].

use std::future::Future;
use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use floorplan_app::ports::TableRepository;
use floorplan_domain::error::FloorplanError;
use floorplan_domain::id::{OrderId, TableId};
use floorplan_domain::status::DelStatus;
use floorplan_domain::table::Table;

use crate::error::StorageError;

struct Wrapper(Table);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let table_name: String = row.try_get("table_name")?;
        let seat_capacity: i64 = row.try_get("seat_capacity")?;
        let order_id: Option<String> = row.try_get("order_id")?;
        let del_status: String = row.try_get("del_status")?;

        let id = TableId::from_str(&id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let seat_capacity =
            u32::try_from(seat_capacity).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let order = order_id
            .map(|s| OrderId::from_str(&s))
            .transpose()
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let del_status =
            DelStatus::from_str(&del_status).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(Table {
            id,
            table_name,
            seat_capacity,
            order,
            del_status,
        }))
    }
}

const INSERT: &str = "INSERT INTO dining_tables (id, table_name, seat_capacity, order_id, del_status) VALUES (?, ?, ?, ?, ?)";
const SELECT_BY_IDS: &str =
    "SELECT * FROM dining_tables WHERE id IN (SELECT value FROM json_each(?))";

/// `SQLite`-backed table repository.
pub struct SqliteTableRepository {
    pool: SqlitePool,
}

impl SqliteTableRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl TableRepository for SqliteTableRepository {
    fn create(&self, table: Table) -> impl Future<Output = Result<Table, FloorplanError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(table.id.to_string())
                .bind(&table.table_name)
                .bind(i64::from(table.seat_capacity))
                .bind(table.order.map(|id| id.to_string()))
                .bind(table.del_status.as_str())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(table)
        }
    }

    fn get_by_ids(
        &self,
        ids: &[TableId],
    ) -> impl Future<Output = Result<Vec<Table>, FloorplanError>> + Send {
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
