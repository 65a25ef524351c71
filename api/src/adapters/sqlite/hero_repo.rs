//! SQLite adapter for HeroRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use super::db_error;
use crate::domain::entities::{Hero, HeroId, NewHero};
use crate::domain::ports::HeroRepository;
use crate::entity::heroes;
use crate::error::DomainError;

/// SQLite implementation of HeroRepository
pub struct SqliteHeroRepository {
    db: DatabaseConnection,
}

impl SqliteHeroRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl HeroRepository for SqliteHeroRepository {
    async fn list(&self) -> Result<Vec<Hero>, DomainError> {
        let results = heroes::Entity::find()
            .order_by_asc(heroes::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_id(&self, id: &HeroId) -> Result<Option<Hero>, DomainError> {
        let result = heroes::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(db_error)?;

        Ok(result.map(|m| m.into()))
    }

    async fn create(&self, hero: &NewHero) -> Result<Hero, DomainError> {
        let model = heroes::ActiveModel {
            name: Set(hero.name.clone()),
            super_name: Set(hero.super_name.clone()),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(db_error)?;

        Ok(result.into())
    }
}

/// Convert SeaORM model to domain entity
impl From<heroes::Model> for Hero {
    fn from(model: heroes::Model) -> Self {
        Hero {
            id: HeroId(model.id),
            name: model.name,
            super_name: model.super_name,
        }
    }
}
