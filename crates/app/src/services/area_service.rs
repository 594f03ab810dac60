//! Area service — use-cases for managing areas.

use floorplan_domain::area::{Area, AreaInput, PopulatedArea};
use floorplan_domain::error::{ConflictError, FloorplanError, NotFoundError};
use floorplan_domain::id::AreaId;

use crate::ports::{AreaRepository, OrderRepository, OutletRepository, TableRepository};
use crate::services::populate::AreaPopulator;

/// Application service for area CRUD operations.
///
/// Reads resolve `tables` (with their orders) and `outlet_id`; writes return
/// the stored record with references left as ids.
pub struct AreaService<AR, TR, OR, UR> {
    repo: AR,
    populator: AreaPopulator<TR, OR, UR>,
}

impl<AR, TR, OR, UR> AreaService<AR, TR, OR, UR>
where
    AR: AreaRepository,
    TR: TableRepository,
    OR: OrderRepository,
    UR: OutletRepository,
{
    /// Create a new service backed by the given repositories.
    pub fn new(repo: AR, tables: TR, orders: OR, outlets: UR) -> Self {
        Self {
            repo,
            populator: AreaPopulator::new(tables, orders, outlets),
        }
    }

    /// Validate `input` and insert it as a new live area.
    ///
    /// The name check and the insert are separate storage calls, so two
    /// concurrent inserts of the same name can both succeed.
    ///
    /// # Errors
    ///
    /// Returns [`FloorplanError::Validation`] for invalid input,
    /// [`FloorplanError::Conflict`] when a live area already uses the name,
    /// or a storage error propagated from the repository.
    pub async fn create_area(&self, input: AreaInput) -> Result<Area, FloorplanError> {
        let new = input.validate_create()?;

        if let Some(existing) = self.repo.find_live_by_name(&new.area_name).await? {
            tracing::warn!(area_id = %existing.id, area_name = %existing.area_name, "area name already in use");
            return Err(ConflictError::AreaNameTaken {
                area_name: new.area_name,
            }
            .into());
        }

        let created = self.repo.create(Area::new(new)).await?;
        tracing::info!(area_id = %created.id, area_name = %created.area_name, "area created");
        Ok(created)
    }

    /// List every live area with its references resolved.
    ///
    /// # Errors
    ///
    /// Returns [`FloorplanError::NotFound`] when there is no live area, or a
    /// storage error propagated from a repository.
    pub async fn list_areas(&self) -> Result<Vec<PopulatedArea>, FloorplanError> {
        let areas = self.repo.get_live().await?;
        if areas.is_empty() {
            return Err(NotFoundError::NoLiveAreas.into());
        }
        self.populator.populate_all(areas).await
    }

    /// Look up an area by id, deleted or not, with its references resolved.
    ///
    /// # Errors
    ///
    /// Returns [`FloorplanError::NotFound`] when no area with `id` exists,
    /// or a storage error from a repository.
    pub async fn get_area(&self, id: AreaId) -> Result<PopulatedArea, FloorplanError> {
        let area = self
            .repo
            .get_by_id(id)
            .await?
            .ok_or(NotFoundError::Area { id })?;
        self.populator.populate(area).await
    }

    /// Validate `input` and apply the fields it carries to the area with `id`.
    ///
    /// The name is not re-checked for uniqueness.
    ///
    /// # Errors
    ///
    /// Returns [`FloorplanError::Validation`] for invalid input,
    /// [`FloorplanError::NotFound`] when no area with `id` exists, or a
    /// storage error from the repository.
    pub async fn update_area(&self, id: AreaId, input: AreaInput) -> Result<Area, FloorplanError> {
        let patch = input.validate_update()?;
        let updated = self
            .repo
            .find_and_update(id, patch)
            .await?
            .ok_or(NotFoundError::Area { id })?;
        tracing::info!(area_id = %id, "area updated");
        Ok(updated)
    }

    /// Soft-delete an area by id.
    ///
    /// # Errors
    ///
    /// Returns [`FloorplanError::NotFound`] when no area with `id` exists,
    /// or a storage error from the repository.
    pub async fn delete_area(&self, id: AreaId) -> Result<(), FloorplanError> {
        self.repo
            .mark_deleted(id)
            .await?
            .ok_or(NotFoundError::Area { id })?;
        tracing::info!(area_id = %id, "area deleted");
        Ok(())
    }
}
