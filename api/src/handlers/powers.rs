//! Power handlers

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};
use serde::Deserialize;

use super::path_id;
use super::responses::{PowerDetailResponse, PowerResponse};
use crate::domain::entities::PowerId;
use crate::error::AppError;
use crate::AppState;

/// Request body for updating a power
#[derive(Debug, Deserialize)]
pub struct UpdatePowerRequest {
    pub description: Option<String>,
}

/// GET /powers
///
/// List all powers, without their heroes.
pub async fn list_powers(
    State(state): State<AppState>,
) -> Result<Json<Vec<PowerResponse>>, AppError> {
    let powers = state.power_service.list_powers().await?;

    Ok(Json(powers.into_iter().map(Into::into).collect()))
}

/// GET /powers/:id
///
/// One power with each of its hero_powers and their hero.
pub async fn get_power(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<PowerDetailResponse>, AppError> {
    let id = path_id(path, "Power")?;

    let power = state.power_service.get_power(&PowerId(id)).await?;

    Ok(Json(power.into()))
}

/// PATCH /powers/:id
///
/// Replace the power's description. Only `description` is read from the body.
pub async fn update_power(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    body: Result<Json<UpdatePowerRequest>, JsonRejection>,
) -> Result<Json<PowerDetailResponse>, AppError> {
    let id = PowerId(path_id(path, "Power")?);

    let request = match body {
        Ok(Json(request)) => request,
        Err(rejection) => {
            // A missing power is reported before a bad body
            state.power_service.get_power(&id).await?;
            return Err(rejection.into());
        }
    };

    let power = state
        .power_service
        .update_description(&id, request.description)
        .await?;

    Ok(Json(power.into()))
}
