use axum::http::HeaderMap;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::membership::MembershipRepository,
    error::{auth::AuthError, AppError},
    model::auth::AuthContext,
};

/// Header carrying the authenticated user id, set by the authentication gateway.
pub const USER_ID_HEADER: &str = "x-user-id";

pub enum Permission {
    PlatformAdmin,
    /// Active membership in the tenant.
    Member(i32),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, headers: &'a HeaderMap) -> Self {
        Self { db, headers }
    }

    /// Resolves the caller and checks every permission.
    ///
    /// Platform admins pass every check.
    ///
    /// # Returns
    /// - `Ok(AuthContext)` - Caller with all memberships
    /// - `Err(AuthError::MissingIdentity)` - Header absent or not an integer id
    /// - `Err(AuthError::UnknownUser)` - No such user
    /// - `Err(AuthError::Forbidden)` - A permission is not met
    pub async fn require(&self, permissions: &[Permission]) -> Result<AuthContext, AppError> {
        let Some(user_id) = self
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<i32>().ok())
        else {
            return Err(AuthError::MissingIdentity.into());
        };

        let Some(caller) = MembershipRepository::new(self.db)
            .auth_context(user_id)
            .await?
        else {
            return Err(AuthError::UnknownUser(user_id).into());
        };

        if caller.is_platform_admin {
            return Ok(caller);
        }

        for permission in permissions {
            match permission {
                Permission::PlatformAdmin => {
                    return Err(AuthError::Forbidden(
                        "Platform administrator access required".to_string(),
                    )
                    .into());
                }
                Permission::Member(tenant_id) => {
                    if caller.membership(*tenant_id).is_none() {
                        return Err(
                            AuthError::Forbidden("Not a member of this clan".to_string()).into(),
                        );
                    }
                }
            }
        }

        Ok(caller)
    }
}
