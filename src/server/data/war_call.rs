use chrono::{DateTime, Utc};
use entity::war_call::CallStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct WarCallRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WarCallRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets active calls for a war, ordered by map position.
    pub async fn get_active_by_war(
        &self,
        tenant_id: i32,
        war_id: i32,
    ) -> Result<Vec<entity::war_call::Model>, DbErr> {
        entity::prelude::WarCall::find()
            .filter(entity::war_call::Column::TenantId.eq(tenant_id))
            .filter(entity::war_call::Column::WarId.eq(war_id))
            .filter(entity::war_call::Column::Status.eq(CallStatus::Active))
            .order_by_asc(entity::war_call::Column::MapPosition)
            .all(self.db)
            .await
    }

    /// Inserts an active call.
    ///
    /// The partial unique index on `(war_id, map_position) WHERE status = 'active'`
    /// rejects a second active call on the same base; the caller maps that error.
    ///
    /// # Returns
    /// - `Ok(entity::war_call::Model)` - Created call
    /// - `Err(DbErr)` - Database error, including the unique constraint violation
    pub async fn create(
        &self,
        tenant_id: i32,
        war_id: i32,
        map_position: i32,
        player_tag: String,
        player_name: String,
    ) -> Result<entity::war_call::Model, DbErr> {
        let now = Utc::now();

        entity::war_call::ActiveModel {
            tenant_id: ActiveValue::Set(tenant_id),
            war_id: ActiveValue::Set(war_id),
            map_position: ActiveValue::Set(map_position),
            player_tag: ActiveValue::Set(player_tag),
            player_name: ActiveValue::Set(player_name),
            status: ActiveValue::Set(CallStatus::Active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find(
        &self,
        tenant_id: i32,
        war_id: i32,
        call_id: i32,
    ) -> Result<Option<entity::war_call::Model>, DbErr> {
        entity::prelude::WarCall::find_by_id(call_id)
            .filter(entity::war_call::Column::TenantId.eq(tenant_id))
            .filter(entity::war_call::Column::WarId.eq(war_id))
            .one(self.db)
            .await
    }

    /// Moves a call from `active` to `cancelled`.
    ///
    /// The update is guarded on the current status, so cancelling twice leaves the
    /// first cancellation untouched.
    ///
    /// # Returns
    /// - `Ok(Some(model))` - Call after the transition (or unchanged if already cancelled)
    /// - `Ok(None)` - Call does not exist
    /// - `Err(DbErr)` - Database error
    pub async fn cancel(
        &self,
        call_id: i32,
        now: DateTime<Utc>,
    ) -> Result<Option<entity::war_call::Model>, DbErr> {
        entity::prelude::WarCall::update_many()
            .set(entity::war_call::ActiveModel {
                status: ActiveValue::Set(CallStatus::Cancelled),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .filter(entity::war_call::Column::Id.eq(call_id))
            .filter(entity::war_call::Column::Status.eq(CallStatus::Active))
            .exec(self.db)
            .await?;

        entity::prelude::WarCall::find_by_id(call_id)
            .one(self.db)
            .await
    }
}
