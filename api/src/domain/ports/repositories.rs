//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., SQLite).

use async_trait::async_trait;

use crate::domain::entities::{
    Hero, HeroId, HeroPower, HeroPowerId, HeroPowerWithHero, HeroPowerWithPower, NewHero,
    NewHeroPower, NewPower, Power, PowerId,
};
use crate::error::DomainError;

/// Repository for Hero entities
#[async_trait]
pub trait HeroRepository: Send + Sync {
    /// List all heroes
    async fn list(&self) -> Result<Vec<Hero>, DomainError>;

    /// Find a hero by ID
    async fn find_by_id(&self, id: &HeroId) -> Result<Option<Hero>, DomainError>;

    /// Create a new hero
    async fn create(&self, hero: &NewHero) -> Result<Hero, DomainError>;
}

/// Repository for Power entities
#[async_trait]
pub trait PowerRepository: Send + Sync {
    /// List all powers
    async fn list(&self) -> Result<Vec<Power>, DomainError>;

    /// Find a power by ID
    async fn find_by_id(&self, id: &PowerId) -> Result<Option<Power>, DomainError>;

    /// Create a new power
    ///
    /// Fails with `DomainError::Validation` if the description is too short.
    async fn create(&self, power: &NewPower) -> Result<Power, DomainError>;

    /// Replace a power's description
    ///
    /// Fails with `DomainError::Validation` if the description is too short,
    /// or `DomainError::NotFound` if the power does not exist.
    async fn update_description(&self, id: &PowerId, description: &str)
        -> Result<Power, DomainError>;
}

/// Repository for HeroPower join entities
#[async_trait]
pub trait HeroPowerRepository: Send + Sync {
    /// Find a link by ID
    async fn find_by_id(&self, id: &HeroPowerId) -> Result<Option<HeroPower>, DomainError>;

    /// Create a new link between an existing hero and an existing power
    async fn create(&self, hero_power: &NewHeroPower) -> Result<HeroPower, DomainError>;

    /// All links held by a hero, each with its power
    async fn find_by_hero(&self, hero_id: &HeroId)
        -> Result<Vec<HeroPowerWithPower>, DomainError>;

    /// All links to a power, each with its hero
    async fn find_by_power(&self, power_id: &PowerId)
        -> Result<Vec<HeroPowerWithHero>, DomainError>;
}
