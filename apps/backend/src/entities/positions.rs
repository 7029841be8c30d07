use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "positions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::player_positions::Entity")]
    PlayerPositions,
}

impl Related<super::player_positions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlayerPositions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
