use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "players")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    /// Stat name -> value, stored as a JSON object.
    pub stats: Json,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
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

impl Related<super::positions::Entity> for Entity {
    fn to() -> RelationDef {
        super::player_positions::Relation::Position.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::player_positions::Relation::Player.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
