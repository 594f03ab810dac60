//! JSON REST handlers for areas.

use std::str::FromStr;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use floorplan_app::ports::{AreaRepository, OrderRepository, OutletRepository, TableRepository};
use floorplan_domain::area::{Area, AreaInput, PopulatedArea};
use floorplan_domain::error::ValidationError;
use floorplan_domain::id::AreaId;

use crate::error::ApiError;
use crate::state::AppState;

/// Body carrying a single area.
#[derive(Serialize)]
pub struct AreaEnvelope<T> {
    pub message: &'static str,
    pub area: T,
}

/// Body carrying the area listing.
#[derive(Serialize)]
pub struct AreasEnvelope {
    pub message: &'static str,
    pub areas: Vec<PopulatedArea>,
}

/// Body carrying only a confirmation message.
#[derive(Serialize)]
pub struct MessageEnvelope {
    pub message: &'static str,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<AreasEnvelope>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => (StatusCode::OK, json).into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<AreaEnvelope<PopulatedArea>>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => (StatusCode::OK, json).into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Inserted(Json<AreaEnvelope<Area>>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Inserted(json) => (StatusCode::OK, json).into_response(),
        }
    }
}

/// Possible responses from the update endpoint.
pub enum UpdateResponse {
    Ok(Json<AreaEnvelope<Area>>),
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => (StatusCode::OK, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Deleted,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Deleted => (
                StatusCode::OK,
                Json(MessageEnvelope {
                    message: "Area Deleted successfully",
                }),
            )
                .into_response(),
        }
    }
}

fn parse_area_id(raw: &str) -> Result<AreaId, ValidationError> {
    AreaId::from_str(raw).map_err(|_| ValidationError::InvalidId(raw.to_string()))
}

fn malformed(rejection: &JsonRejection) -> ValidationError {
    ValidationError::Malformed(rejection.body_text())
}

/// `GET /api/areas`
pub async fn list<AR, TR, OR, UR>(
    State(state): State<AppState<AR, TR, OR, UR>>,
) -> Result<ListResponse, ApiError>
where
    AR: AreaRepository + Send + Sync + 'static,
    TR: TableRepository + Send + Sync + 'static,
    OR: OrderRepository + Send + Sync + 'static,
    UR: OutletRepository + Send + Sync + 'static,
{
    let areas = state.area_service.list_areas().await?;
    Ok(ListResponse::Ok(Json(AreasEnvelope {
        message: "success",
        areas,
    })))
}

/// `GET /api/areas/{id}`
pub async fn get<AR, TR, OR, UR>(
    State(state): State<AppState<AR, TR, OR, UR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    AR: AreaRepository + Send + Sync + 'static,
    TR: TableRepository + Send + Sync + 'static,
    OR: OrderRepository + Send + Sync + 'static,
    UR: OutletRepository + Send + Sync + 'static,
{
    let area_id = parse_area_id(&id)?;
    let area = state.area_service.get_area(area_id).await?;
    Ok(GetResponse::Ok(Json(AreaEnvelope {
        message: "success",
        area,
    })))
}

/// `POST /api/areas`
pub async fn create<AR, TR, OR, UR>(
    State(state): State<AppState<AR, TR, OR, UR>>,
    payload: Result<Json<AreaInput>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    AR: AreaRepository + Send + Sync + 'static,
    TR: TableRepository + Send + Sync + 'static,
    OR: OrderRepository + Send + Sync + 'static,
    UR: OutletRepository + Send + Sync + 'static,
{
    let Json(input) = payload.map_err(|rejection| ApiError::inserting(malformed(&rejection)))?;
    let area = state
        .area_service
        .create_area(input)
        .await
        .map_err(ApiError::inserting)?;
    Ok(CreateResponse::Inserted(Json(AreaEnvelope {
        message: "Area inserted",
        area,
    })))
}

/// `PUT /api/areas/{id}` and `PATCH /api/areas/{id}`
pub async fn update<AR, TR, OR, UR>(
    State(state): State<AppState<AR, TR, OR, UR>>,
    Path(id): Path<String>,
    payload: Result<Json<AreaInput>, JsonRejection>,
) -> Result<UpdateResponse, ApiError>
where
    AR: AreaRepository + Send + Sync + 'static,
    TR: TableRepository + Send + Sync + 'static,
    OR: OrderRepository + Send + Sync + 'static,
    UR: OutletRepository + Send + Sync + 'static,
{
    let area_id = parse_area_id(&id)?;
    let Json(input) = payload.map_err(|rejection| malformed(&rejection))?;
    let area = state.area_service.update_area(area_id, input).await?;
    Ok(UpdateResponse::Ok(Json(AreaEnvelope {
        message: "success",
        area,
    })))
}

/// `DELETE /api/areas/{id}`
pub async fn delete<AR, TR, OR, UR>(
    State(state): State<AppState<AR, TR, OR, UR>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    AR: AreaRepository + Send + Sync + 'static,
    TR: TableRepository + Send + Sync + 'static,
    OR: OrderRepository + Send + Sync + 'static,
    UR: OutletRepository + Send + Sync + 'static,
{
    let area_id = parse_area_id(&id)?;
    state.area_service.delete_area(area_id).await?;
    Ok(DeleteResponse::Deleted)
}
