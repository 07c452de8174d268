//! War repository.
//!
//! Ingestion writes wars through [`WarRepository::upsert_snapshot`]; everything else
//! here is read-only and excludes soft-deleted wars.

use chrono::{DateTime, Utc};
use entity::war::WarState;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::server::model::war::{War, WarDetail, WarSnapshot};

pub struct WarRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WarRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts or updates a war by its natural key `(tenant_id, war_tag)`.
    ///
    /// Every payload-owned field is overwritten. `start_time` is only overwritten when
    /// the snapshot carries one; otherwise the first-seen time from the original insert
    /// is kept. `created_at` and `is_deleted` are never touched on update.
    ///
    /// # Arguments
    /// - `tenant_id` - Owning tenant
    /// - `snapshot` - Merge-ready war state
    /// - `now` - Timestamp used for `updated_at` and as first-seen start time
    ///
    /// # Returns
    /// - `Ok(entity::war::Model)` - Stored war after the upsert
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn upsert_snapshot(
        &self,
        tenant_id: i32,
        snapshot: &WarSnapshot,
        now: DateTime<Utc>,
    ) -> Result<entity::war::Model, DbErr> {
        use entity::war::Column;

        let mut update_columns = vec![
            Column::State,
            Column::OpponentTag,
            Column::OpponentName,
            Column::TeamSize,
            Column::EndTime,
            Column::Result,
            Column::TeamStars,
            Column::OpponentStars,
            Column::TeamDestruction,
            Column::OpponentDestruction,
            Column::RawPayload,
            Column::UpdatedAt,
        ];
        if snapshot.start_time.is_some() {
            update_columns.push(Column::StartTime);
        }

        entity::prelude::War::insert(entity::war::ActiveModel {
            tenant_id: ActiveValue::Set(tenant_id),
            war_tag: ActiveValue::Set(snapshot.war_tag.clone()),
            state: ActiveValue::Set(snapshot.state),
            opponent_tag: ActiveValue::Set(snapshot.opponent_tag.clone()),
            opponent_name: ActiveValue::Set(snapshot.opponent_name.clone()),
            team_size: ActiveValue::Set(snapshot.team_size),
            start_time: ActiveValue::Set(snapshot.start_time.unwrap_or(now)),
            end_time: ActiveValue::Set(snapshot.end_time),
            result: ActiveValue::Set(snapshot.result.clone()),
            team_stars: ActiveValue::Set(snapshot.team_stars),
            opponent_stars: ActiveValue::Set(snapshot.opponent_stars),
            team_destruction: ActiveValue::Set(snapshot.team_destruction),
            opponent_destruction: ActiveValue::Set(snapshot.opponent_destruction),
            raw_payload: ActiveValue::Set(snapshot.raw_payload.clone()),
            is_deleted: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::columns([Column::TenantId, Column::WarTag])
                .update_columns(update_columns)
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await
    }

    /// Finds a non-deleted war belonging to the tenant.
    pub async fn find_for_tenant(
        &self,
        tenant_id: i32,
        war_id: i32,
    ) -> Result<Option<entity::war::Model>, DbErr> {
        entity::prelude::War::find_by_id(war_id)
            .filter(entity::war::Column::TenantId.eq(tenant_id))
            .filter(entity::war::Column::IsDeleted.eq(false))
            .one(self.db)
            .await
    }

    /// Gets the newest war in `preparation` or `inWar` for the tenant.
    pub async fn find_active(&self, tenant_id: i32) -> Result<Option<entity::war::Model>, DbErr> {
        entity::prelude::War::find()
            .filter(entity::war::Column::TenantId.eq(tenant_id))
            .filter(entity::war::Column::IsDeleted.eq(false))
            .filter(entity::war::Column::State.is_in([WarState::Preparation, WarState::InWar]))
            .order_by_desc(entity::war::Column::StartTime)
            .order_by_desc(entity::war::Column::Id)
            .one(self.db)
            .await
    }

    /// Loads the roster (by map position) and attacks (by order) for a war.
    pub async fn get_detail(&self, war: entity::war::Model) -> Result<WarDetail, DbErr> {
        let participants = entity::prelude::WarParticipant::find()
            .filter(entity::war_participant::Column::WarId.eq(war.id))
            .order_by_asc(entity::war_participant::Column::MapPosition)
            .order_by_asc(entity::war_participant::Column::Id)
            .all(self.db)
            .await?;

        let attacks = entity::prelude::Attack::find()
            .filter(entity::attack::Column::WarId.eq(war.id))
            .order_by_asc(entity::attack::Column::Order)
            .order_by_asc(entity::attack::Column::Id)
            .all(self.db)
            .await?;

        Ok(WarDetail {
            war: War::from_entity(war),
            participants,
            attacks,
        })
    }

    /// Gets one page of a tenant's wars, newest first.
    ///
    /// Rows are ordered by `(start_time DESC, id DESC)`. When `after` is given, only rows
    /// strictly after that position in the ordering are returned.
    ///
    /// # Arguments
    /// - `tenant_id` - Owning tenant
    /// - `limit` - Page size
    /// - `after` - `(start_time, id)` of the last row of the previous page
    ///
    /// # Returns
    /// - `Ok((wars, has_more))` - Up to `limit` wars and whether more rows follow
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_page(
        &self,
        tenant_id: i32,
        limit: u64,
        after: Option<(DateTime<Utc>, i32)>,
    ) -> Result<(Vec<entity::war::Model>, bool), DbErr> {
        use entity::war::Column;

        let mut query = entity::prelude::War::find()
            .filter(Column::TenantId.eq(tenant_id))
            .filter(Column::IsDeleted.eq(false));

        if let Some((start_time, id)) = after {
            query = query.filter(
                Condition::any().add(Column::StartTime.lt(start_time)).add(
                    Condition::all()
                        .add(Column::StartTime.eq(start_time))
                        .add(Column::Id.lt(id)),
                ),
            );
        }

        let mut wars = query
            .order_by_desc(Column::StartTime)
            .order_by_desc(Column::Id)
            .limit(limit + 1)
            .all(self.db)
            .await?;

        let has_more = wars.len() as u64 > limit;
        wars.truncate(limit as usize);

        Ok((wars, has_more))
    }
}
