use sea_orm::entity::prelude::*;

/// Point-in-time snapshot of one clan member in a war, rewritten on every poll.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "war_participant")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub war_id: i32,
    pub player_tag: String,
    pub player_name: String,
    pub town_hall_level: i32,
    pub map_position: i32,
    pub attacks_used: i32,
    pub opponent_attacks_received: i32,
    #[sea_orm(column_type = "Json", nullable)]
    pub best_opponent_attack: Option<Json>,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::war::Entity",
        from = "Column::WarId",
        to = "super::war::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    War,
}

impl Related<super::war::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::War.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
