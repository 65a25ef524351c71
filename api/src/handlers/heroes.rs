//! Hero handlers

use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};

use super::path_id;
use super::responses::{HeroDetailResponse, HeroResponse};
use crate::domain::entities::HeroId;
use crate::error::AppError;
use crate::AppState;

/// GET /heroes
///
/// List all heroes, without their powers.
pub async fn list_heroes(
    State(state): State<AppState>,
) -> Result<Json<Vec<HeroResponse>>, AppError> {
    let heroes = state.hero_service.list_heroes().await?;

    Ok(Json(heroes.into_iter().map(Into::into).collect()))
}

/// GET /heroes/:id
///
/// One hero with each of its hero_powers and their power.
pub async fn get_hero(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<HeroDetailResponse>, AppError> {
    let id = path_id(path, "Hero")?;

    let hero = state.hero_service.get_hero(&HeroId(id)).await?;

    Ok(Json(hero.into()))
}
