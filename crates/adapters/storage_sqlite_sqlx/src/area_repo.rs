//! `SQLite` implementation of [`AreaRepository`].

use std::future::Future;
use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use floorplan_app::ports::AreaRepository;
use floorplan_domain::area::{Area, AreaPatch};
use floorplan_domain::error::FloorplanError;
use floorplan_domain::id::{AreaId, OutletId, TableId};
use floorplan_domain::status::DelStatus;
use floorplan_domain::time::{self, Timestamp};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Area`].
struct Wrapper(Area);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Area> {
        value.map(|w| w.0)
    }
}

fn decode_timestamp(value: &str) -> Result<Timestamp, sqlx::Error> {
    chrono::DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.to_utc())
        .map_err(|err| sqlx::Error::Decode(Box::new(err)))
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let area_name: String = row.try_get("area_name")?;
        let outlet_id: Option<String> = row.try_get("outlet_id")?;
        let tables_json: String = row.try_get("tables")?;
        let del_status: String = row.try_get("del_status")?;
        let created_at: String = row.try_get("created_at")?;
        let updated_at: String = row.try_get("updated_at")?;

        let id = AreaId::from_str(&id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let outlet_id = outlet_id
            .map(|s| OutletId::from_str(&s))
            .transpose()
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let tables: Vec<TableId> = serde_json::from_str(&tables_json)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let del_status =
            DelStatus::from_str(&del_status).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(Area {
            id,
            area_name,
            outlet_id,
            tables,
            del_status,
            created_at: decode_timestamp(&created_at)?,
            updated_at: decode_timestamp(&updated_at)?,
        }))
    }
}

const INSERT: &str = "INSERT INTO areas (id, area_name, outlet_id, tables, del_status, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?)";
const SELECT_LIVE_BY_NAME: &str =
    "SELECT * FROM areas WHERE area_name = ? AND del_status = 'Live' LIMIT 1";
const SELECT_BY_ID: &str = "SELECT * FROM areas WHERE id = ?";
const SELECT_LIVE: &str = "SELECT * FROM areas WHERE del_status = 'Live' ORDER BY rowid";
const FIND_AND_UPDATE: &str = "UPDATE areas SET area_name = COALESCE(?, area_name), outlet_id = COALESCE(?, outlet_id), tables = COALESCE(?, tables), updated_at = ? WHERE id = ? RETURNING *";
const MARK_DELETED: &str =
    "UPDATE areas SET del_status = 'Deleted', updated_at = ? WHERE id = ? RETURNING *";

/// `SQLite`-backed area repository.
pub struct SqliteAreaRepository {
    pool: SqlitePool,
}

impl SqliteAreaRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl AreaRepository for SqliteAreaRepository {
    fn create(&self, area: Area) -> impl Future<Output = Result<Area, FloorplanError>> + Send {
        let pool = self.pool.clone();
        async move {
            let tables_json = serde_json::to_string(&area.tables).map_err(StorageError::from)?;
            sqlx::query(INSERT)
                .bind(area.id.to_string())
                .bind(&area.area_name)
                .bind(area.outlet_id.map(|id| id.to_string()))
                .bind(&tables_json)
                .bind(area.del_status.as_str())
                .bind(area.created_at.to_rfc3339())
                .bind(area.updated_at.to_rfc3339())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(area)
        }
    }

    fn find_live_by_name(
        &self,
        area_name: &str,
    ) -> impl Future<Output = Result<Option<Area>, FloorplanError>> + Send {
        let pool = self.pool.clone();
        let area_name = area_name.to_string();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_LIVE_BY_NAME)
                .bind(area_name)
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_by_id(
        &self,
        id: AreaId,
    ) -> impl Future<Output = Result<Option<Area>, FloorplanError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.to_string())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_live(&self) -> impl Future<Output = Result<Vec<Area>, FloorplanError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_LIVE)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn find_and_update(
        &self,
        id: AreaId,
        patch: AreaPatch,
    ) -> impl Future<Output = Result<Option<Area>, FloorplanError>> + Send {
        let pool = self.pool.clone();
        async move {
            let tables_json = patch
                .tables
                .as_ref()
                .map(serde_json::to_string)
                .transpose()
                .map_err(StorageError::from)?;

            let row: Option<Wrapper> = sqlx::query_as(FIND_AND_UPDATE)
                .bind(patch.area_name)
                .bind(patch.outlet_id.map(|id| id.to_string()))
                .bind(tables_json)
                .bind(time::now().to_rfc3339())
                .bind(id.to_string())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn mark_deleted(
        &self,
        id: AreaId,
    ) -> impl Future<Output = Result<Option<Area>, FloorplanError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(MARK_DELETED)
                .bind(time::now().to_rfc3339())
                .bind(id.to_string())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }
}
