//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod hero_powers;
pub mod heroes;
pub mod powers;
pub mod responses;

use axum::extract::{rejection::PathRejection, Path};
use axum::response::Html;

use crate::error::AppError;

pub use hero_powers::create_hero_power;
pub use heroes::{get_hero, list_heroes};
pub use powers::{get_power, list_powers, update_power};

/// GET /
pub async fn index() -> Html<&'static str> {
    Html("<h1>Code challenge</h1>")
}

/// Read an integer id from the path.
///
/// Ids that are not integers can never match a row, so they get the same
/// 404 as a missing `entity`.
fn path_id(path: Result<Path<i32>, PathRejection>, entity: &str) -> Result<i32, AppError> {
    path.map(|Path(id)| id)
        .map_err(|_| AppError::NotFound(format!("{} not found", entity)))
}
