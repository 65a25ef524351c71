//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services run the request-level checks, then coordinate the repositories.

pub mod hero_power_service;
pub mod hero_service;
pub mod power_service;

pub use hero_power_service::{HeroPowerService, RawId};
pub use hero_service::HeroService;
pub use power_service::PowerService;
