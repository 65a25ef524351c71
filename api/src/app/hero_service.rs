//! Hero service
//!
//! Read access to heroes and the powers they hold.

use std::sync::Arc;

use crate::domain::entities::{Hero, HeroId, HeroWithPowers, NewHero, Power};
use crate::domain::ports::{HeroPowerRepository, HeroRepository};
use crate::error::AppError;

/// Service for reading heroes
pub struct HeroService<HR, HPR>
where
    HR: HeroRepository,
    HPR: HeroPowerRepository,
{
    heroes: Arc<HR>,
    hero_powers: Arc<HPR>,
}

impl<HR, HPR> HeroService<HR, HPR>
where
    HR: HeroRepository,
    HPR: HeroPowerRepository,
{
    pub fn new(heroes: Arc<HR>, hero_powers: Arc<HPR>) -> Self {
        Self {
            heroes,
            hero_powers,
        }
    }

    /// List every hero, without their power links
    pub async fn list_heroes(&self) -> Result<Vec<Hero>, AppError> {
        Ok(self.heroes.list().await?)
    }

    /// Get a hero with each of its power links
    pub async fn get_hero(&self, id: &HeroId) -> Result<HeroWithPowers, AppError> {
        let hero = self
            .heroes
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Hero not found".to_string()))?;

        let hero_powers = self.hero_powers.find_by_hero(&hero.id).await?;

        Ok(HeroWithPowers { hero, hero_powers })
    }

    /// The powers a hero holds, read through the join table
    pub async fn powers(&self, id: &HeroId) -> Result<Vec<Power>, AppError> {
        let links = self.hero_powers.find_by_hero(id).await?;
        Ok(links.into_iter().map(|link| link.power).collect())
    }

    /// Create a hero
    pub async fn create_hero(&self, hero: NewHero) -> Result<Hero, AppError> {
        let hero = self.heroes.create(&hero).await?;
        tracing::info!(hero_id = %hero.id, "Created {}", hero);
        Ok(hero)
    }
}
