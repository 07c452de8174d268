//! War call reservations.
//!
//! A call reserves one opponent base for one player. The store guarantees at most
//! one active call per `(war, map position)`; this service only translates the
//! storage outcome and enforces who may cancel what.

use chrono::Utc;
use entity::membership::Role;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{war::WarRepository, war_call::WarCallRepository},
    error::{auth::AuthError, AppError},
    model::{
        auth::AuthContext,
        war_call::{CreateWarCallParams, WarCall},
    },
    util::tag::normalize_tag,
};

pub struct WarCallService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WarCallService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists active calls for a war ordered by map position
    pub async fn list_calls(&self, tenant_id: i32, war_id: i32) -> Result<Vec<WarCall>, AppError> {
        let calls = WarCallRepository::new(self.db)
            .get_active_by_war(tenant_id, war_id)
            .await?;

        Ok(calls.into_iter().map(WarCall::from_entity).collect())
    }

    /// Reserves an opponent base for a player.
    ///
    /// There is no read-before-write on the base: the insert itself is the check, and
    /// a unique violation from the partial index is reported as a conflict.
    ///
    /// # Arguments
    /// - `tenant_id` - Tenant owning the war
    /// - `war_id` - War containing the base
    /// - `params` - Map position and calling player
    ///
    /// # Returns
    /// - `Ok(WarCall)` - The new active call
    /// - `Err(AppError::NotFound)` - No such non-deleted war in the tenant
    /// - `Err(AppError::BadRequest)` - Map position below 1 or malformed player tag
    /// - `Err(AppError::Conflict)` - The base already has an active call
    /// - `Err(AppError::DbErr)` - Other database error
    pub async fn create_call(
        &self,
        tenant_id: i32,
        war_id: i32,
        params: CreateWarCallParams,
    ) -> Result<WarCall, AppError> {
        WarRepository::new(self.db)
            .find_for_tenant(tenant_id, war_id)
            .await?
            .ok_or_else(|| AppError::NotFound("War not found".to_string()))?;

        if params.map_position < 1 {
            return Err(AppError::BadRequest(
                "Map position must be at least 1".to_string(),
            ));
        }
        let player_tag = normalize_tag(&params.player_tag)?;

        let call = WarCallRepository::new(self.db)
            .create(
                tenant_id,
                war_id,
                params.map_position,
                player_tag,
                params.player_name.trim().to_string(),
            )
            .await
            .map_err(|e| AppError::conflict_on_unique(e, "This base is already called"))?;

        Ok(WarCall::from_entity(call))
    }

    /// Cancels a call on behalf of `caller`.
    ///
    /// Checks run in order: the call must exist in the tenant's war; platform admins
    /// always pass; otherwise the caller needs an active membership and either a role
    /// of at least co-leader or a linked player tag equal to the call's.
    ///
    /// # Returns
    /// - `Ok(WarCall)` - The cancelled call (unchanged if it was already cancelled)
    /// - `Err(AppError::NotFound)` - No such call in this tenant and war
    /// - `Err(AppError::AuthErr)` - Caller may not cancel this call
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn delete_call(
        &self,
        tenant_id: i32,
        war_id: i32,
        call_id: i32,
        caller: &AuthContext,
    ) -> Result<WarCall, AppError> {
        let repo = WarCallRepository::new(self.db);

        let call = repo
            .find(tenant_id, war_id, call_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Call not found".to_string()))?;

        if !caller.is_platform_admin {
            let membership = caller.membership(tenant_id).ok_or_else(|| {
                AuthError::Forbidden("Not a member of this clan".to_string())
            })?;

            let can_manage_any = membership.role.at_least(Role::CoLeader);
            let is_owner = membership.player_tag.as_deref() == Some(call.player_tag.as_str());

            if !can_manage_any && !is_owner {
                return Err(AuthError::Forbidden("You cannot cancel this call".to_string()).into());
            }
        }

        let cancelled = repo
            .cancel(call.id, Utc::now())
            .await?
            .ok_or_else(|| AppError::NotFound("Call not found".to_string()))?;

        Ok(WarCall::from_entity(cancelled))
    }
}
