use sea_orm::entity::prelude::*;

/// A registered clan. `clan_tag` is always stored in canonical `#XXXX` form.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tenant")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub clan_tag: String,
    pub clan_name: String,
    pub clan_level: i32,
    pub member_count: i32,
    pub description: Option<String>,
    pub is_active: bool,
    pub is_deleted: bool,
    pub last_synced_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::war::Entity")]
    War,
    #[sea_orm(has_many = "super::membership::Entity")]
    Membership,
}

impl Related<super::war::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::War.def()
    }
}

impl Related<super::membership::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Membership.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
