//! SQLite adapter for PowerRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};

use super::db_error;
use crate::domain::entities::{NewPower, Power, PowerId};
use crate::domain::ports::PowerRepository;
use crate::entity::powers;
use crate::error::DomainError;

/// SQLite implementation of PowerRepository
pub struct SqlitePowerRepository {
    db: DatabaseConnection,
}

impl SqlitePowerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PowerRepository for SqlitePowerRepository {
    async fn list(&self) -> Result<Vec<Power>, DomainError> {
        let results = powers::Entity::find()
            .order_by_asc(powers::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_id(&self, id: &PowerId) -> Result<Option<Power>, DomainError> {
        let result = powers::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(db_error)?;

        Ok(result.map(|m| m.into()))
    }

    async fn create(&self, power: &NewPower) -> Result<Power, DomainError> {
        let model = powers::ActiveModel {
            name: Set(power.name.clone()),
            description: Set(power.description.clone()),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(db_error)?;

        Ok(result.into())
    }

    async fn update_description(
        &self,
        id: &PowerId,
        description: &str,
    ) -> Result<Power, DomainError> {
        let result = powers::ActiveModel {
            id: Set(id.0),
            description: Set(description.to_string()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .map_err(|e| match e {
            DbErr::RecordNotUpdated => DomainError::NotFound("Power not found".to_string()),
            e => db_error(e),
        })?;

        Ok(result.into())
    }
}

/// Convert SeaORM model to domain entity
impl From<powers::Model> for Power {
    fn from(model: powers::Model) -> Self {
        Power {
            id: PowerId(model.id),
            name: model.name,
            description: model.description,
        }
    }
}
