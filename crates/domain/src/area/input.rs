//! Raw client input for areas and its validation into typed payloads.

use std::collections::HashSet;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::ValidationError;
use crate::id::{OutletId, TableId};

/// Longest accepted `area_name`, counted in characters after trimming.
pub const AREA_NAME_MAX_LEN: usize = 100;

/// Untrusted request body for creating or updating an area.
///
/// Every field is optional at this stage; [`validate_create`](Self::validate_create)
/// and [`validate_update`](Self::validate_update) decide which ones must be present.
/// Unknown fields (including `del_status`) are rejected while decoding.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AreaInput {
    pub area_name: Option<String>,
    pub outlet_id: Option<String>,
    pub tables: Option<Vec<String>>,
}

/// Validated fields for a new area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArea {
    pub area_name: String,
    pub outlet_id: Option<OutletId>,
    pub tables: Vec<TableId>,
}

/// Validated partial update. `None` means "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AreaPatch {
    pub area_name: Option<String>,
    pub outlet_id: Option<OutletId>,
    pub tables: Option<Vec<TableId>>,
}

impl AreaPatch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.area_name.is_none() && self.outlet_id.is_none() && self.tables.is_none()
    }
}

impl AreaInput {
    /// Validate against the create rules.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when `area_name` is missing, blank or too
    /// long, or when an id is malformed or a table is listed twice.
    pub fn validate_create(self) -> Result<NewArea, ValidationError> {
        let area_name = self.area_name.ok_or(ValidationError::MissingAreaName)?;
        Ok(NewArea {
            area_name: area_name_rule(&area_name)?,
            outlet_id: self.outlet_id.as_deref().map(parse_id).transpose()?,
            tables: self
                .tables
                .map(|tables| tables_rule(&tables))
                .transpose()?
                .unwrap_or_default(),
        })
    }

    /// Validate against the update rules: same field rules, all optional,
    /// but at least one field must be present.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyUpdate`] when no field is given, or the
    /// field-level error of the first offending field.
    pub fn validate_update(self) -> Result<AreaPatch, ValidationError> {
        let patch = AreaPatch {
            area_name: self.area_name.as_deref().map(area_name_rule).transpose()?,
            outlet_id: self.outlet_id.as_deref().map(parse_id).transpose()?,
            tables: self
                .tables
                .map(|tables| tables_rule(&tables))
                .transpose()?,
        };
        if patch.is_empty() {
            return Err(ValidationError::EmptyUpdate);
        }
        Ok(patch)
    }
}

fn area_name_rule(raw: &str) -> Result<String, ValidationError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyAreaName);
    }
    if name.chars().count() > AREA_NAME_MAX_LEN {
        return Err(ValidationError::AreaNameTooLong {
            max: AREA_NAME_MAX_LEN,
        });
    }
    Ok(name.to_string())
}

fn tables_rule(raw: &[String]) -> Result<Vec<TableId>, ValidationError> {
    let mut seen = HashSet::with_capacity(raw.len());
    let mut tables = Vec::with_capacity(raw.len());
    for value in raw {
        let id: TableId = parse_id(value)?;
        if !seen.insert(id) {
            return Err(ValidationError::DuplicateTable(value.clone()));
        }
        tables.push(id);
    }
    Ok(tables)
}

fn parse_id<T: FromStr>(raw: &str) -> Result<T, ValidationError> {
    T::from_str(raw).map_err(|_| ValidationError::InvalidId(raw.to_string()))
}
