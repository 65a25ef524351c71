//! SQLite adapter for HeroPowerRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::db_error;
use crate::domain::entities::{
    Hero, HeroId, HeroPower, HeroPowerId, HeroPowerWithHero, HeroPowerWithPower, NewHeroPower,
    Power, PowerId,
};
use crate::domain::ports::HeroPowerRepository;
use crate::entity::{hero_powers, heroes, powers};
use crate::error::DomainError;

/// SQLite implementation of HeroPowerRepository
pub struct SqliteHeroPowerRepository {
    db: DatabaseConnection,
}

impl SqliteHeroPowerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl HeroPowerRepository for SqliteHeroPowerRepository {
    async fn find_by_id(&self, id: &HeroPowerId) -> Result<Option<HeroPower>, DomainError> {
        let result = hero_powers::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(db_error)?;

        result.map(HeroPower::try_from).transpose()
    }

    async fn create(&self, hero_power: &NewHeroPower) -> Result<HeroPower, DomainError> {
        let model = hero_powers::ActiveModel {
            strength: Set(hero_power.strength.to_string()),
            hero_id: Set(hero_power.hero_id.0),
            power_id: Set(hero_power.power_id.0),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(db_error)?;

        result.try_into()
    }

    async fn find_by_hero(
        &self,
        hero_id: &HeroId,
    ) -> Result<Vec<HeroPowerWithPower>, DomainError> {
        let results = hero_powers::Entity::find()
            .filter(hero_powers::Column::HeroId.eq(hero_id.0))
            .order_by_asc(hero_powers::Column::Id)
            .find_also_related(powers::Entity)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        results
            .into_iter()
            .map(|(link, power)| -> Result<HeroPowerWithPower, DomainError> {
                let power = power.ok_or_else(|| dangling(&link, "power"))?;
                Ok(HeroPowerWithPower {
                    hero_power: link.try_into()?,
                    power: Power::from(power),
                })
            })
            .collect()
    }

    async fn find_by_power(
        &self,
        power_id: &PowerId,
    ) -> Result<Vec<HeroPowerWithHero>, DomainError> {
        let results = hero_powers::Entity::find()
            .filter(hero_powers::Column::PowerId.eq(power_id.0))
            .order_by_asc(hero_powers::Column::Id)
            .find_also_related(heroes::Entity)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        results
            .into_iter()
            .map(|(link, hero)| -> Result<HeroPowerWithHero, DomainError> {
                let hero = hero.ok_or_else(|| dangling(&link, "hero"))?;
                Ok(HeroPowerWithHero {
                    hero_power: link.try_into()?,
                    hero: Hero::from(hero),
                })
            })
            .collect()
    }
}

/// A stored link whose referenced row is gone
fn dangling(link: &hero_powers::Model, side: &str) -> DomainError {
    DomainError::Internal(format!(
        "hero_powers row {} references a missing {}",
        link.id, side
    ))
}

/// Convert SeaORM model to domain entity
impl TryFrom<hero_powers::Model> for HeroPower {
    type Error = DomainError;

    fn try_from(model: hero_powers::Model) -> Result<Self, Self::Error> {
        let strength = model.strength.parse().map_err(|e: String| {
            DomainError::Internal(format!("hero_powers row {}: {}", model.id, e))
        })?;

        Ok(HeroPower {
            id: HeroPowerId(model.id),
            strength,
            hero_id: HeroId(model.hero_id),
            power_id: PowerId(model.power_id),
        })
    }
}
