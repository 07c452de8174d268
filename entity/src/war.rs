use sea_orm::entity::prelude::*;

/// Upstream war lifecycle state, stored with the upstream spelling.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum WarState {
    #[sea_orm(string_value = "preparation")]
    Preparation,
    #[sea_orm(string_value = "inWar")]
    InWar,
    #[sea_orm(string_value = "warEnded")]
    WarEnded,
    #[sea_orm(string_value = "notInWar")]
    NotInWar,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "war")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub tenant_id: i32,
    /// Natural key within the tenant: upstream war tag or a synthesized composite.
    pub war_tag: String,
    pub state: WarState,
    pub opponent_tag: Option<String>,
    pub opponent_name: Option<String>,
    pub team_size: i32,
    pub start_time: DateTimeUtc,
    pub end_time: Option<DateTimeUtc>,
    pub result: Option<String>,
    pub team_stars: i32,
    pub opponent_stars: i32,
    pub team_destruction: f64,
    pub opponent_destruction: f64,
    #[sea_orm(column_type = "Json")]
    pub raw_payload: Json,
    pub is_deleted: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tenant::Entity",
        from = "Column::TenantId",
        to = "super::tenant::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Tenant,
    #[sea_orm(has_many = "super::war_participant::Entity")]
    WarParticipant,
    #[sea_orm(has_many = "super::attack::Entity")]
    Attack,
    #[sea_orm(has_many = "super::war_call::Entity")]
    WarCall,
}

impl Related<super::tenant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tenant.def()
    }
}

impl Related<super::war_participant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WarParticipant.def()
    }
}

impl Related<super::attack::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attack.def()
    }
}

impl Related<super::war_call::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WarCall.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
