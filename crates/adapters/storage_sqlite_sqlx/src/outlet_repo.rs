//! `SQLite` implementation of [`OutletRepository`].

use std::future::Future;
use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use floorplan_app::ports::OutletRepository;
use floorplan_domain::error::FloorplanError;
use floorplan_domain::id::OutletId;
use floorplan_domain::outlet::Outlet;
use floorplan_domain::status::DelStatus;

use crate::error::StorageError;

struct Wrapper(Outlet);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let outlet_name: String = row.try_get("outlet_name")?;
        let address: Option<String> = row.try_get("address")?;
        let del_status: String = row.try_get("del_status")?;

        let id = OutletId::from_str(&id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let del_status =
            DelStatus::from_str(&del_status).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(Outlet {
            id,
            outlet_name,
            address,
            del_status,
        }))
    }
}

const INSERT: &str =
    "INSERT INTO outlets (id, outlet_name, address, del_status) VALUES (?, ?, ?, ?)";
const SELECT_BY_IDS: &str = "SELECT * FROM outlets WHERE id IN (SELECT value FROM json_each(?))";

/// `SQLite`-backed outlet repository.
pub struct SqliteOutletRepository {
    pool: SqlitePool,
}

impl SqliteOutletRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl OutletRepository for SqliteOutletRepository {
    fn create(
        &self,
        outlet: Outlet,
    ) -> impl Future<Output = Result<Outlet, FloorplanError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(outlet.id.to_string())
                .bind(&outlet.outlet_name)
                .bind(outlet.address.as_deref())
                .bind(outlet.del_status.as_str())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(outlet)
        }
    }

    fn get_by_ids(
        &self,
        ids: &[OutletId],
    ) -> impl Future<Output = Result<Vec<Outlet>, FloorplanError>> + Send {
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
