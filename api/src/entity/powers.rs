use async_trait::async_trait;
use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue;

use crate::domain::entities::validate_description;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "powers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::hero_powers::Entity")]
    HeroPowers,
}

impl Related<super::hero_powers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HeroPowers.def()
    }
}

impl Related<super::heroes::Entity> for Entity {
    fn to() -> RelationDef {
        super::hero_powers::Relation::Heroes.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::hero_powers::Relation::Powers.def().rev())
    }
}

#[async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(description) = &self.description {
            validate_description(description).map_err(super::reject)?;
        }
        Ok(self)
    }
}
