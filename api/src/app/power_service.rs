//! Power service
//!
//! Reads powers and the heroes holding them, and updates power descriptions.

use std::sync::Arc;

use crate::domain::entities::{
    validate_description, Hero, NewPower, Power, PowerId, PowerWithHeroes,
};
use crate::domain::ports::{HeroPowerRepository, PowerRepository};
use crate::error::AppError;

/// Service for reading and updating powers
pub struct PowerService<PR, HPR>
where
    PR: PowerRepository,
    HPR: HeroPowerRepository,
{
    powers: Arc<PR>,
    hero_powers: Arc<HPR>,
}

impl<PR, HPR> PowerService<PR, HPR>
where
    PR: PowerRepository,
    HPR: HeroPowerRepository,
{
    pub fn new(powers: Arc<PR>, hero_powers: Arc<HPR>) -> Self {
        Self {
            powers,
            hero_powers,
        }
    }

    /// List every power, without their hero links
    pub async fn list_powers(&self) -> Result<Vec<Power>, AppError> {
        Ok(self.powers.list().await?)
    }

    /// Get a power with each of its hero links
    pub async fn get_power(&self, id: &PowerId) -> Result<PowerWithHeroes, AppError> {
        let power = self.find(id).await?;
        self.with_heroes(power).await
    }

    /// Replace a power's description
    ///
    /// Checks run in order: the power must exist, `description` must be
    /// supplied, and it must be at least 20 characters.
    pub async fn update_description(
        &self,
        id: &PowerId,
        description: Option<String>,
    ) -> Result<PowerWithHeroes, AppError> {
        let power = self.find(id).await?;

        let description =
            description.ok_or_else(|| AppError::invalid("Description is required"))?;

        if validate_description(&description).is_err() {
            return Err(AppError::invalid("validation errors"));
        }

        let updated = self
            .powers
            .update_description(&power.id, &description)
            .await?;
        tracing::info!(power_id = %updated.id, "Updated description of {}", updated);

        self.with_heroes(updated).await
    }

    /// The heroes holding a power, read through the join table
    pub async fn heroes(&self, id: &PowerId) -> Result<Vec<Hero>, AppError> {
        let links = self.hero_powers.find_by_power(id).await?;
        Ok(links.into_iter().map(|link| link.hero).collect())
    }

    /// Create a power
    pub async fn create_power(&self, power: NewPower) -> Result<Power, AppError> {
        if validate_description(&power.description).is_err() {
            return Err(AppError::invalid("validation errors"));
        }

        let power = self.powers.create(&power).await?;
        tracing::info!(power_id = %power.id, "Created {}", power);
        Ok(power)
    }

    async fn find(&self, id: &PowerId) -> Result<Power, AppError> {
        self.powers
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Power not found".to_string()))
    }

    async fn with_heroes(&self, power: Power) -> Result<PowerWithHeroes, AppError> {
        let hero_powers = self.hero_powers.find_by_power(&power.id).await?;
        Ok(PowerWithHeroes { power, hero_powers })
    }
}
