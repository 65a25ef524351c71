use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "heroes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub super_name: String,
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

impl Related<super::powers::Entity> for Entity {
    fn to() -> RelationDef {
        super::hero_powers::Relation::Powers.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::hero_powers::Relation::Heroes.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
