//! Superheroes API
//!
//! Heroes, powers and the links between them, served as JSON.
//! Uses hexagonal (ports & adapters) architecture: `domain` holds the types
//! and repository traits, `adapters` the SQLite implementations, `app` the
//! services and `handlers` the HTTP layer.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod entity;
pub mod error;
pub mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{SqliteHeroPowerRepository, SqliteHeroRepository, SqlitePowerRepository};
use app::{HeroPowerService, HeroService, PowerService};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub hero_service: Arc<HeroService<SqliteHeroRepository, SqliteHeroPowerRepository>>,
    pub power_service: Arc<PowerService<SqlitePowerRepository, SqliteHeroPowerRepository>>,
    pub hero_power_service: Arc<
        HeroPowerService<SqliteHeroRepository, SqlitePowerRepository, SqliteHeroPowerRepository>,
    >,
}

impl AppState {
    /// Wire repositories and services over one connection pool
    pub fn new(db: DatabaseConnection) -> Self {
        let hero_repo = Arc::new(SqliteHeroRepository::new(db.clone()));
        let power_repo = Arc::new(SqlitePowerRepository::new(db.clone()));
        let hero_power_repo = Arc::new(SqliteHeroPowerRepository::new(db));

        Self {
            hero_service: Arc::new(HeroService::new(
                hero_repo.clone(),
                hero_power_repo.clone(),
            )),
            power_service: Arc::new(PowerService::new(
                power_repo.clone(),
                hero_power_repo.clone(),
            )),
            hero_power_service: Arc::new(HeroPowerService::new(
                hero_repo,
                power_repo,
                hero_power_repo,
            )),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(health))
        .route("/heroes", get(handlers::list_heroes))
        .route("/heroes/:id", get(handlers::get_hero))
        .route("/powers", get(handlers::list_powers))
        .route(
            "/powers/:id",
            get(handlers::get_power).patch(handlers::update_power),
        )
        .route("/hero_powers", post(handlers::create_hero_power))
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
