//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and apply the same validation as the SQLite
//! adapters, so service tests see the same failures.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{
    validate_description, Hero, HeroId, HeroPower, HeroPowerId, HeroPowerWithHero,
    HeroPowerWithPower, NewHero, NewHeroPower, NewPower, Power, PowerId,
};
use crate::domain::ports::{HeroPowerRepository, HeroRepository, PowerRepository};
use crate::error::DomainError;

// ============================================================================
// In-Memory Hero Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryHeroRepository {
    heroes: Arc<RwLock<BTreeMap<HeroId, Hero>>>,
}

impl InMemoryHeroRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with heroes for testing
    pub fn with_heroes(self, heroes: Vec<Hero>) -> Self {
        {
            let mut map = self.heroes.write().unwrap();
            for hero in heroes {
                map.insert(hero.id, hero);
            }
        }
        self
    }

    fn get(&self, id: &HeroId) -> Option<Hero> {
        self.heroes.read().unwrap().get(id).cloned()
    }
}

#[async_trait]
impl HeroRepository for InMemoryHeroRepository {
    async fn list(&self) -> Result<Vec<Hero>, DomainError> {
        Ok(self.heroes.read().unwrap().values().cloned().collect())
    }

    async fn find_by_id(&self, id: &HeroId) -> Result<Option<Hero>, DomainError> {
        Ok(self.get(id))
    }

    async fn create(&self, new_hero: &NewHero) -> Result<Hero, DomainError> {
        let mut heroes = self.heroes.write().unwrap();
        let hero = Hero {
            id: HeroId(heroes.keys().next_back().map_or(1, |id| id.0 + 1)),
            name: new_hero.name.clone(),
            super_name: new_hero.super_name.clone(),
        };
        heroes.insert(hero.id, hero.clone());
        Ok(hero)
    }
}

// ============================================================================
// In-Memory Power Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryPowerRepository {
    powers: Arc<RwLock<BTreeMap<PowerId, Power>>>,
}

impl InMemoryPowerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with powers for testing (not validated)
    pub fn with_powers(self, powers: Vec<Power>) -> Self {
        {
            let mut map = self.powers.write().unwrap();
            for power in powers {
                map.insert(power.id, power);
            }
        }
        self
    }

    fn get(&self, id: &PowerId) -> Option<Power> {
        self.powers.read().unwrap().get(id).cloned()
    }
}

#[async_trait]
impl PowerRepository for InMemoryPowerRepository {
    async fn list(&self) -> Result<Vec<Power>, DomainError> {
        Ok(self.powers.read().unwrap().values().cloned().collect())
    }

    async fn find_by_id(&self, id: &PowerId) -> Result<Option<Power>, DomainError> {
        Ok(self.get(id))
    }

    async fn create(&self, new_power: &NewPower) -> Result<Power, DomainError> {
        validate_description(&new_power.description)?;

        let mut powers = self.powers.write().unwrap();
        let power = Power {
            id: PowerId(powers.keys().next_back().map_or(1, |id| id.0 + 1)),
            name: new_power.name.clone(),
            description: new_power.description.clone(),
        };
        powers.insert(power.id, power.clone());
        Ok(power)
    }

    async fn update_description(
        &self,
        id: &PowerId,
        description: &str,
    ) -> Result<Power, DomainError> {
        validate_description(description)?;

        let mut powers = self.powers.write().unwrap();
        let power = powers
            .get_mut(id)
            .ok_or_else(|| DomainError::NotFound("Power not found".to_string()))?;
        power.description = description.to_string();
        Ok(power.clone())
    }
}

// ============================================================================
// In-Memory HeroPower Repository
// ============================================================================

/// Join-table mock; resolves both ends through the hero and power mocks
pub struct InMemoryHeroPowerRepository {
    links: Arc<RwLock<BTreeMap<HeroPowerId, HeroPower>>>,
    heroes: Arc<InMemoryHeroRepository>,
    powers: Arc<InMemoryPowerRepository>,
}

impl InMemoryHeroPowerRepository {
    pub fn new(heroes: Arc<InMemoryHeroRepository>, powers: Arc<InMemoryPowerRepository>) -> Self {
        Self {
            links: Arc::new(RwLock::new(BTreeMap::new())),
            heroes,
            powers,
        }
    }

    /// Pre-populate with links for testing (references not checked)
    pub fn with_links(self, links: Vec<HeroPower>) -> Self {
        {
            let mut map = self.links.write().unwrap();
            for link in links {
                map.insert(link.id, link);
            }
        }
        self
    }
}

#[async_trait]
impl HeroPowerRepository for InMemoryHeroPowerRepository {
    async fn find_by_id(&self, id: &HeroPowerId) -> Result<Option<HeroPower>, DomainError> {
        Ok(self.links.read().unwrap().get(id).cloned())
    }

    async fn create(&self, new_link: &NewHeroPower) -> Result<HeroPower, DomainError> {
        if self.heroes.get(&new_link.hero_id).is_none()
            || self.powers.get(&new_link.power_id).is_none()
        {
            return Err(DomainError::Database(
                "FOREIGN KEY constraint failed".to_string(),
            ));
        }

        let mut links = self.links.write().unwrap();
        let link = HeroPower {
            id: HeroPowerId(links.keys().next_back().map_or(1, |id| id.0 + 1)),
            strength: new_link.strength,
            hero_id: new_link.hero_id,
            power_id: new_link.power_id,
        };
        links.insert(link.id, link.clone());
        Ok(link)
    }

    async fn find_by_hero(
        &self,
        hero_id: &HeroId,
    ) -> Result<Vec<HeroPowerWithPower>, DomainError> {
        let links = self.links.read().unwrap();
        links
            .values()
            .filter(|link| link.hero_id == *hero_id)
            .map(|link| -> Result<HeroPowerWithPower, DomainError> {
                let power = self.powers.get(&link.power_id).ok_or_else(|| {
                    DomainError::Internal(format!("{} references a missing power", link))
                })?;
                Ok(HeroPowerWithPower {
                    hero_power: link.clone(),
                    power,
                })
            })
            .collect()
    }

    async fn find_by_power(
        &self,
        power_id: &PowerId,
    ) -> Result<Vec<HeroPowerWithHero>, DomainError> {
        let links = self.links.read().unwrap();
        links
            .values()
            .filter(|link| link.power_id == *power_id)
            .map(|link| -> Result<HeroPowerWithHero, DomainError> {
                let hero = self.heroes.get(&link.hero_id).ok_or_else(|| {
                    DomainError::Internal(format!("{} references a missing hero", link))
                })?;
                Ok(HeroPowerWithHero {
                    hero_power: link.clone(),
                    hero,
                })
            })
            .collect()
    }
}
