//! Area — a named zone of an outlet (patio, hall, terrace) holding tables.

mod input;

pub use input::{AREA_NAME_MAX_LEN, AreaInput, AreaPatch, NewArea};

use serde::{Deserialize, Serialize};

use crate::id::{AreaId, OutletId, TableId};
use crate::outlet::Outlet;
use crate::status::DelStatus;
use crate::table::PopulatedTable;
use crate::time::{self, Timestamp};

/// A stored area with its references left unresolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Area {
    pub id: AreaId,
    pub area_name: String,
    pub outlet_id: Option<OutletId>,
    pub tables: Vec<TableId>,
    pub del_status: DelStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Area {
    /// Materialize a validated create payload as a fresh, live record.
    #[must_use]
    pub fn new(input: NewArea) -> Self {
        let now = time::now();
        Self {
            id: AreaId::new(),
            area_name: input.area_name,
            outlet_id: input.outlet_id,
            tables: input.tables,
            del_status: DelStatus::Live,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite the fields present in `patch`, leaving the rest untouched.
    pub fn apply(&mut self, patch: AreaPatch) {
        if let Some(area_name) = patch.area_name {
            self.area_name = area_name;
        }
        if let Some(outlet_id) = patch.outlet_id {
            self.outlet_id = Some(outlet_id);
        }
        if let Some(tables) = patch.tables {
            self.tables = tables;
        }
        self.updated_at = time::now();
    }

    /// Soft-delete the record. Deleting twice is a no-op on the status.
    pub fn mark_deleted(&mut self) {
        self.del_status = DelStatus::Deleted;
        self.updated_at = time::now();
    }

    #[must_use]
    pub fn is_live(&self) -> bool {
        self.del_status.is_live()
    }

    /// Replace the references with their resolved records.
    #[must_use]
    pub fn populate(self, outlet: Option<Outlet>, tables: Vec<PopulatedTable>) -> PopulatedArea {
        PopulatedArea {
            id: self.id,
            area_name: self.area_name,
            outlet_id: outlet,
            tables,
            del_status: self.del_status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// An [`Area`] with `tables` and `outlet_id` resolved.
///
/// `outlet_id` keeps its field name but carries the outlet itself, or `null`
/// when the outlet is missing or deleted. `tables` only holds live tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopulatedArea {
    pub id: AreaId,
    pub area_name: String,
    pub outlet_id: Option<Outlet>,
    pub tables: Vec<PopulatedTable>,
    pub del_status: DelStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patio() -> Area {
        Area::new(NewArea {
            area_name: "Patio".to_string(),
            outlet_id: None,
            tables: vec![],
        })
    }

    #[test]
    fn should_start_live_when_created() {
        let area = patio();
        assert_eq!(area.del_status, DelStatus::Live);
        assert_eq!(area.created_at, area.updated_at);
    }

    #[test]
    fn should_change_only_patched_fields() {
        let mut area = patio();
        let outlet = OutletId::new();
        let table = TableId::new();
        area.outlet_id = Some(outlet);

        area.apply(AreaPatch {
            area_name: None,
            outlet_id: None,
            tables: Some(vec![table]),
        });

        assert_eq!(area.area_name, "Patio");
        assert_eq!(area.outlet_id, Some(outlet));
        assert_eq!(area.tables, vec![table]);
    }

    #[test]
    fn should_keep_fields_when_marked_deleted() {
        let mut area = patio();
        area.mark_deleted();
        assert_eq!(area.del_status, DelStatus::Deleted);
        assert_eq!(area.area_name, "Patio");
        assert!(!area.is_live());
    }

    #[test]
    fn should_serialize_missing_outlet_as_null_when_populated() {
        let populated = patio().populate(None, vec![]);
        let json = serde_json::to_value(&populated).unwrap();
        assert!(json["outlet_id"].is_null());
        assert_eq!(json["del_status"], "Live");
        assert_eq!(json["tables"], serde_json::json!([]));
    }

    #[test]
    fn should_embed_outlet_under_outlet_id_when_populated() {
        let outlet = Outlet::new("Downtown");
        let populated = patio().populate(Some(outlet), vec![]);
        let json = serde_json::to_value(&populated).unwrap();
        assert_eq!(json["outlet_id"]["outlet_name"], "Downtown");
    }
}
