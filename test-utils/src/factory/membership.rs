//! Membership factory linking users to tenants with a role.

use chrono::Utc;
use entity::membership::Role;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test memberships.
///
/// # Example
///
/// ```rust,ignore
/// let membership = MembershipFactory::new(&db, user.id, tenant.id)
///     .role(Role::CoLeader)
///     .player_tag(Some("#P1".to_string()))
///     .build()
///     .await?;
/// ```
pub struct MembershipFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    tenant_id: i32,
    role: Role,
    is_active: bool,
    player_tag: Option<String>,
}

impl<'a> MembershipFactory<'a> {
    /// Creates a new MembershipFactory.
    ///
    /// Defaults:
    /// - role: `Role::Member`
    /// - is_active: `true`
    /// - player_tag: `None`
    pub fn new(db: &'a DatabaseConnection, user_id: i32, tenant_id: i32) -> Self {
        Self {
            db,
            user_id,
            tenant_id,
            role: Role::Member,
            is_active: true,
            player_tag: None,
        }
    }

    pub fn role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub fn player_tag(mut self, player_tag: Option<String>) -> Self {
        self.player_tag = player_tag;
        self
    }

    pub async fn build(self) -> Result<entity::membership::Model, DbErr> {
        entity::membership::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            tenant_id: ActiveValue::Set(self.tenant_id),
            role: ActiveValue::Set(self.role),
            is_active: ActiveValue::Set(self.is_active),
            player_tag: ActiveValue::Set(self.player_tag),
            joined_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active membership with the given role and no linked player.
pub async fn create_membership(
    db: &DatabaseConnection,
    user_id: i32,
    tenant_id: i32,
    role: Role,
) -> Result<entity::membership::Model, DbErr> {
    MembershipFactory::new(db, user_id, tenant_id)
        .role(role)
        .build()
        .await
}
