use sea_orm::entity::prelude::*;

/// A recorded attack. Rows are insert-only.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "attack")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub war_id: i32,
    pub attacker_tag: String,
    pub attacker_name: Option<String>,
    pub defender_tag: String,
    /// Upstream sequence number of the attack within its war.
    pub order: i32,
    pub stars: i32,
    pub destruction_percent: f64,
    pub duration: i32,
    pub is_fresh: bool,
    pub created_at: DateTimeUtc,
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
