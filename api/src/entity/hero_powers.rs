use async_trait::async_trait;
use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue;

use crate::domain::entities::validate_strength;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "hero_powers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub strength: String,
    pub hero_id: i32,
    pub power_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::heroes::Entity",
        from = "Column::HeroId",
        to = "super::heroes::Column::Id",
        fk_name = "fk_hero_powers_hero_id_heroes",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Heroes,
    #[sea_orm(
        belongs_to = "super::powers::Entity",
        from = "Column::PowerId",
        to = "super::powers::Column::Id",
        fk_name = "fk_hero_powers_power_id_powers",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Powers,
}

impl Related<super::heroes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Heroes.def()
    }
}

impl Related<super::powers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Powers.def()
    }
}

#[async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(strength) = &self.strength {
            validate_strength(strength).map_err(super::reject)?;
        }
        Ok(self)
    }
}
