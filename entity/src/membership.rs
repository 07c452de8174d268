use sea_orm::entity::prelude::*;

/// Clan role, ordered by weight from `Member` (1) to `SuperAdmin` (5).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum Role {
    #[sea_orm(string_value = "MEMBER")]
    Member,
    #[sea_orm(string_value = "ELDER")]
    Elder,
    #[sea_orm(string_value = "CO_LEADER")]
    CoLeader,
    #[sea_orm(string_value = "LEADER")]
    Leader,
    #[sea_orm(string_value = "SUPER_ADMIN")]
    SuperAdmin,
}

impl Role {
    /// Integer rank used for `>=` authorization comparisons.
    pub fn weight(self) -> u8 {
        match self {
            Role::Member => 1,
            Role::Elder => 2,
            Role::CoLeader => 3,
            Role::Leader => 4,
            Role::SuperAdmin => 5,
        }
    }

    pub fn at_least(self, required: Role) -> bool {
        self.weight() >= required.weight()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "membership")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub tenant_id: i32,
    pub role: Role,
    pub is_active: bool,
    /// Canonical tag of the in-game account this membership acts as, if linked.
    pub player_tag: Option<String>,
    pub joined_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::app_user::Entity",
        from = "Column::UserId",
        to = "super::app_user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    AppUser,
    #[sea_orm(
        belongs_to = "super::tenant::Entity",
        from = "Column::TenantId",
        to = "super::tenant::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Tenant,
}

impl Related<super::app_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AppUser.def()
    }
}

impl Related<super::tenant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tenant.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
