use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::auth::{AuthContext, MembershipContext};

/// Membership directory consumed for authorization.
pub struct MembershipRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MembershipRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds the authenticated context for a user.
    ///
    /// Includes every membership, active or not; `AuthContext` ignores inactive ones
    /// when checking access.
    ///
    /// # Arguments
    /// - `user_id` - Id of the calling user
    ///
    /// # Returns
    /// - `Ok(Some(AuthContext))` - User exists
    /// - `Ok(None)` - No such user
    /// - `Err(DbErr)` - Database error during query
    pub async fn auth_context(&self, user_id: i32) -> Result<Option<AuthContext>, DbErr> {
        let Some(user) = entity::prelude::AppUser::find_by_id(user_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let memberships = entity::prelude::Membership::find()
            .filter(entity::membership::Column::UserId.eq(user_id))
            .order_by_asc(entity::membership::Column::TenantId)
            .all(self.db)
            .await?;

        Ok(Some(AuthContext {
            user_id: user.id,
            is_platform_admin: user.is_platform_admin,
            memberships: memberships
                .into_iter()
                .map(MembershipContext::from_entity)
                .collect(),
        }))
    }
}
