//! Durable ingestion queue storage.
//!
//! Every state change is a single conditional statement. `pending -> running` is
//! guarded on the row still being pending, so two workers racing for the same row
//! cannot both win. Key dedup is the partial unique index over live rows.

use chrono::{DateTime, Utc};
use entity::ingestion_job::JobStatus;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::server::util::tag::clan_job_key;

pub struct IngestionJobRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> IngestionJobRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a pending job for the clan unless one is already pending or running.
    ///
    /// # Arguments
    /// - `tenant_id` - Tenant owning the clan
    /// - `clan_tag` - Canonical clan tag
    /// - `max_attempts` - Attempt budget for the job
    /// - `now` - Creation and first eligible run time
    ///
    /// # Returns
    /// - `Ok(true)` - A new job was queued
    /// - `Ok(false)` - A live job with the same key exists; nothing was written
    /// - `Err(DbErr)` - Database error during insert
    pub async fn enqueue(
        &self,
        tenant_id: i32,
        clan_tag: &str,
        max_attempts: i32,
        now: DateTime<Utc>,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::IngestionJob::insert(entity::ingestion_job::ActiveModel {
            job_key: ActiveValue::Set(clan_job_key(clan_tag)),
            tenant_id: ActiveValue::Set(tenant_id),
            clan_tag: ActiveValue::Set(clan_tag.to_string()),
            status: ActiveValue::Set(JobStatus::Pending),
            attempts: ActiveValue::Set(0),
            max_attempts: ActiveValue::Set(max_attempts),
            run_at: ActiveValue::Set(now),
            locked_at: ActiveValue::Set(None),
            last_error: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        // No target: the conflict is on the partial index `idx_ingestion_job_live_key`
        // over `job_key`, which a plain column target cannot name.
        .on_conflict(OnConflict::new().do_nothing().to_owned())
        .exec_without_returning(self.db)
        .await;

        match result {
            Ok(rows) => Ok(rows > 0),
            Err(DbErr::RecordNotInserted) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Gets pending jobs whose `run_at` has passed, oldest first.
    pub async fn find_due(
        &self,
        now: DateTime<Utc>,
        limit: u64,
    ) -> Result<Vec<entity::ingestion_job::Model>, DbErr> {
        entity::prelude::IngestionJob::find()
            .filter(entity::ingestion_job::Column::Status.eq(JobStatus::Pending))
            .filter(entity::ingestion_job::Column::RunAt.lte(now))
            .order_by_asc(entity::ingestion_job::Column::RunAt)
            .order_by_asc(entity::ingestion_job::Column::Id)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Attempts to move a pending job to running and count the attempt.
    ///
    /// `attempts` is written from the candidate's value plus one; the guard on both
    /// status and the previous attempt count makes a stale candidate lose.
    ///
    /// # Returns
    /// - `Ok(true)` - This caller owns the job
    /// - `Ok(false)` - Another worker claimed it first
    /// - `Err(DbErr)` - Database error during update
    pub async fn try_claim(
        &self,
        candidate: &entity::ingestion_job::Model,
        now: DateTime<Utc>,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::IngestionJob::update_many()
            .set(entity::ingestion_job::ActiveModel {
                status: ActiveValue::Set(JobStatus::Running),
                attempts: ActiveValue::Set(candidate.attempts + 1),
                locked_at: ActiveValue::Set(Some(now)),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .filter(entity::ingestion_job::Column::Id.eq(candidate.id))
            .filter(entity::ingestion_job::Column::Status.eq(JobStatus::Pending))
            .filter(entity::ingestion_job::Column::Attempts.eq(candidate.attempts))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::ingestion_job::Model>, DbErr> {
        entity::prelude::IngestionJob::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Removes a finished job along with any parked failures for the same key.
    ///
    /// Guarded on the row still being the running claim identified by `attempts`, so
    /// a worker whose job was recovered and claimed again cannot remove the new claim.
    ///
    /// # Returns
    /// - `Ok(true)` - The claim was still held and the job was removed
    /// - `Ok(false)` - The claim was lost; nothing was written
    /// - `Err(DbErr)` - Database error during delete
    pub async fn complete(&self, id: i32, attempts: i32, job_key: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::IngestionJob::delete_many()
            .filter(entity::ingestion_job::Column::Id.eq(id))
            .filter(entity::ingestion_job::Column::Status.eq(JobStatus::Running))
            .filter(entity::ingestion_job::Column::Attempts.eq(attempts))
            .exec(self.db)
            .await?;

        if result.rows_affected != 1 {
            return Ok(false);
        }

        entity::prelude::IngestionJob::delete_many()
            .filter(entity::ingestion_job::Column::JobKey.eq(job_key))
            .filter(entity::ingestion_job::Column::Status.eq(JobStatus::Failed))
            .exec(self.db)
            .await?;

        Ok(true)
    }

    /// Returns a running job to pending, eligible again at `run_at`.
    ///
    /// Guarded on status and the claimed attempt count like [`Self::complete`].
    pub async fn reschedule(
        &self,
        id: i32,
        attempts: i32,
        run_at: DateTime<Utc>,
        error: &str,
        now: DateTime<Utc>,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::IngestionJob::update_many()
            .set(entity::ingestion_job::ActiveModel {
                status: ActiveValue::Set(JobStatus::Pending),
                run_at: ActiveValue::Set(run_at),
                locked_at: ActiveValue::Set(None),
                last_error: ActiveValue::Set(Some(error.to_string())),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .filter(entity::ingestion_job::Column::Id.eq(id))
            .filter(entity::ingestion_job::Column::Status.eq(JobStatus::Running))
            .filter(entity::ingestion_job::Column::Attempts.eq(attempts))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Moves a running job to `failed` with its last error.
    ///
    /// Parked rows drop out of the live-key index, so the scheduler can queue a fresh
    /// job for the same clan on its next tick.
    pub async fn park(
        &self,
        id: i32,
        attempts: i32,
        error: &str,
        now: DateTime<Utc>,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::IngestionJob::update_many()
            .set(entity::ingestion_job::ActiveModel {
                status: ActiveValue::Set(JobStatus::Failed),
                locked_at: ActiveValue::Set(None),
                last_error: ActiveValue::Set(Some(error.to_string())),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .filter(entity::ingestion_job::Column::Id.eq(id))
            .filter(entity::ingestion_job::Column::Status.eq(JobStatus::Running))
            .filter(entity::ingestion_job::Column::Attempts.eq(attempts))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Gets running jobs locked before `cutoff`.
    pub async fn find_stalled(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<entity::ingestion_job::Model>, DbErr> {
        entity::prelude::IngestionJob::find()
            .filter(entity::ingestion_job::Column::Status.eq(JobStatus::Running))
            .filter(entity::ingestion_job::Column::LockedAt.lt(cutoff))
            .order_by_asc(entity::ingestion_job::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets parked jobs, most recently failed first.
    pub async fn get_parked(&self) -> Result<Vec<entity::ingestion_job::Model>, DbErr> {
        entity::prelude::IngestionJob::find()
            .filter(entity::ingestion_job::Column::Status.eq(JobStatus::Failed))
            .order_by_desc(entity::ingestion_job::Column::UpdatedAt)
            .order_by_desc(entity::ingestion_job::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets every row with the given key regardless of status.
    pub async fn get_by_key(
        &self,
        job_key: &str,
    ) -> Result<Vec<entity::ingestion_job::Model>, DbErr> {
        entity::prelude::IngestionJob::find()
            .filter(entity::ingestion_job::Column::JobKey.eq(job_key))
            .order_by_asc(entity::ingestion_job::Column::Id)
            .all(self.db)
            .await
    }
}
