//! Explicit authenticated caller context.
//!
//! Built once per request from the membership directory and passed by reference into
//! every authorization-sensitive operation.

use entity::membership::Role;

/// A caller's standing in one tenant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MembershipContext {
    pub tenant_id: i32,
    pub role: Role,
    /// Canonical tag of the in-game account this membership acts as, if linked.
    pub player_tag: Option<String>,
    pub is_active: bool,
}

impl MembershipContext {
    pub fn from_entity(entity: entity::membership::Model) -> Self {
        Self {
            tenant_id: entity.tenant_id,
            role: entity.role,
            player_tag: entity.player_tag,
            is_active: entity.is_active,
        }
    }
}

/// Authenticated caller with platform flag and all tenant memberships.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    pub user_id: i32,
    pub is_platform_admin: bool,
    pub memberships: Vec<MembershipContext>,
}

impl AuthContext {
    /// Active membership of the caller in `tenant_id`, if any.
    pub fn membership(&self, tenant_id: i32) -> Option<&MembershipContext> {
        self.memberships
            .iter()
            .find(|m| m.tenant_id == tenant_id && m.is_active)
    }

    /// Whether the caller holds at least `required` in `tenant_id`.
    ///
    /// Platform admins always pass. Inactive memberships never do.
    pub fn has_role(&self, tenant_id: i32, required: Role) -> bool {
        self.is_platform_admin
            || self
                .membership(tenant_id)
                .is_some_and(|m| m.role.at_least(required))
    }
}
