use chrono::{DateTime, Utc};
use entity::membership::Role;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::tenant::CreateTenantParams;

pub struct TenantRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TenantRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a tenant and makes `leader_user_id` its LEADER, atomically.
    ///
    /// Both rows are written in one transaction. A duplicate clan tag fails on the
    /// unique constraint and nothing is written.
    ///
    /// # Arguments
    /// - `params` - Clan facts with canonical tag
    /// - `leader_user_id` - Registering user
    ///
    /// # Returns
    /// - `Ok((tenant, membership))` - Created rows
    /// - `Err(DbErr)` - Database error, including unique constraint violations
    pub async fn create_with_leader(
        &self,
        params: CreateTenantParams,
        leader_user_id: i32,
    ) -> Result<(entity::tenant::Model, entity::membership::Model), DbErr> {
        let now = Utc::now();
        let txn = self.db.begin().await?;

        let tenant = entity::tenant::ActiveModel {
            clan_tag: ActiveValue::Set(params.clan_tag),
            clan_name: ActiveValue::Set(params.clan_name),
            clan_level: ActiveValue::Set(params.clan_level),
            member_count: ActiveValue::Set(params.member_count),
            description: ActiveValue::Set(params.description),
            is_active: ActiveValue::Set(true),
            is_deleted: ActiveValue::Set(false),
            last_synced_at: ActiveValue::Set(Some(now)),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let membership = entity::membership::ActiveModel {
            user_id: ActiveValue::Set(leader_user_id),
            tenant_id: ActiveValue::Set(tenant.id),
            role: ActiveValue::Set(Role::Leader),
            is_active: ActiveValue::Set(true),
            player_tag: ActiveValue::Set(None),
            joined_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok((tenant, membership))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::tenant::Model>, DbErr> {
        entity::prelude::Tenant::find_by_id(id).one(self.db).await
    }

    /// Gets every tenant eligible for ingestion: active and not soft-deleted, by id.
    pub async fn get_active(&self) -> Result<Vec<entity::tenant::Model>, DbErr> {
        entity::prelude::Tenant::find()
            .filter(entity::tenant::Column::IsActive.eq(true))
            .filter(entity::tenant::Column::IsDeleted.eq(false))
            .order_by_asc(entity::tenant::Column::Id)
            .all(self.db)
            .await
    }

    /// Stamps the time of the last successful ingestion merge.
    pub async fn mark_synced(&self, id: i32, at: DateTime<Utc>) -> Result<(), DbErr> {
        entity::prelude::Tenant::update_many()
            .set(entity::tenant::ActiveModel {
                last_synced_at: ActiveValue::Set(Some(at)),
                ..Default::default()
            })
            .filter(entity::tenant::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
