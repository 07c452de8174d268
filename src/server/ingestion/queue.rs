//! Durable per-clan job queue.
//!
//! Jobs are rows in `ingestion_job`. At most one pending or running job exists per
//! clan key; successes delete their row and failures either come back after a
//! backoff or are parked as `failed` for operators once the budget is spent.

use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    config::IngestionConfig,
    data::ingestion_job::IngestionJobRepository,
    error::AppError,
    ingestion::backoff::RetryPolicy,
    model::ingestion::{ClanIngestionJob, FailureDisposition},
    util::tag::normalize_tag,
};

/// Candidates fetched per claim attempt; lost races fall through to the next one.
const CLAIM_BATCH: u64 = 10;

pub struct JobQueue<'a> {
    db: &'a DatabaseConnection,
    policy: RetryPolicy,
    stall_timeout: Duration,
}

impl<'a> JobQueue<'a> {
    pub fn new(db: &'a DatabaseConnection, policy: RetryPolicy, stall_timeout: Duration) -> Self {
        Self {
            db,
            policy,
            stall_timeout,
        }
    }

    pub fn from_config(db: &'a DatabaseConnection, config: &IngestionConfig) -> Self {
        Self::new(db, RetryPolicy::from_config(config), config.stall_timeout)
    }

    /// Queues an ingestion run for a clan.
    ///
    /// # Returns
    /// - `Ok(true)` - A new pending job was added
    /// - `Ok(false)` - The clan already has a pending or running job
    /// - `Err(AppError)` - Malformed tag or database error
    pub async fn enqueue(&self, tenant_id: i32, clan_tag: &str) -> Result<bool, AppError> {
        let clan_tag = normalize_tag(clan_tag)?;

        Ok(IngestionJobRepository::new(self.db)
            .enqueue(tenant_id, &clan_tag, self.policy.max_attempts, Utc::now())
            .await?)
    }

    /// Claims the oldest due job, if any.
    ///
    /// Safe to call from many workers and many processes at once: each candidate is
    /// claimed with a guarded update, and a lost race just moves on to the next one.
    pub async fn claim_next(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Option<ClanIngestionJob>, AppError> {
        let repo = IngestionJobRepository::new(self.db);

        for candidate in repo.find_due(now, CLAIM_BATCH).await? {
            if repo.try_claim(&candidate, now).await? {
                let mut job = ClanIngestionJob::from_entity(&candidate);
                job.attempt = candidate.attempts + 1;
                return Ok(Some(job));
            }
        }

        Ok(None)
    }

    /// Removes a successful job and any parked failures it supersedes.
    ///
    /// # Returns
    /// - `Ok(true)` - The job was removed
    /// - `Ok(false)` - The claim was lost to stall recovery; the row belongs to a newer
    ///   run and is left alone
    /// - `Err(AppError)` - Database error
    pub async fn complete(&self, job: &ClanIngestionJob) -> Result<bool, AppError> {
        let completed = IngestionJobRepository::new(self.db)
            .complete(job.id, job.attempt, &job.job_key)
            .await?;

        if !completed {
            tracing::warn!(
                job_id = job.id,
                job_key = %job.job_key,
                attempt = job.attempt,
                "Ingestion job finished after its claim was lost"
            );
        }

        Ok(completed)
    }

    /// Records a failed attempt and decides whether the job runs again.
    ///
    /// # Arguments
    /// - `job` - Job as claimed
    /// - `error` - Failure description stored in `last_error`
    /// - `now` - Failure time; the retry runs at `now + backoff(attempt)`
    ///
    /// # Returns
    /// - `Ok(FailureDisposition::Retrying)` - Back to pending with the next run time
    /// - `Ok(FailureDisposition::Parked)` - Budget exhausted; kept as `failed`
    /// - `Ok(FailureDisposition::ClaimLost)` - The row belongs to a newer run; nothing written
    /// - `Err(AppError)` - Database error or a retry time out of range
    pub async fn fail(
        &self,
        job: &ClanIngestionJob,
        error: &str,
        now: DateTime<Utc>,
    ) -> Result<FailureDisposition, AppError> {
        let repo = IngestionJobRepository::new(self.db);

        if job.attempt < job.max_attempts {
            let run_at = shift(now, self.policy.delay_for(job.attempt), Shift::Later)?;

            if !repo.reschedule(job.id, job.attempt, run_at, error, now).await? {
                return Ok(self.claim_lost(job, error));
            }

            tracing::warn!(
                job_id = job.id,
                job_key = %job.job_key,
                attempt = job.attempt,
                "Ingestion job failed, retrying at {}: {}",
                run_at,
                error
            );

            Ok(FailureDisposition::Retrying { run_at })
        } else {
            if !repo.park(job.id, job.attempt, error, now).await? {
                return Ok(self.claim_lost(job, error));
            }

            tracing::error!(
                job_id = job.id,
                job_key = %job.job_key,
                attempt = job.attempt,
                "Ingestion job parked after {} attempts: {}",
                job.attempt,
                error
            );

            Ok(FailureDisposition::Parked)
        }
    }

    fn claim_lost(&self, job: &ClanIngestionJob, error: &str) -> FailureDisposition {
        tracing::warn!(
            job_id = job.id,
            job_key = %job.job_key,
            attempt = job.attempt,
            "Ingestion job failed after its claim was lost: {}",
            error
        );

        FailureDisposition::ClaimLost
    }

    /// Releases jobs whose worker stopped before finishing.
    ///
    /// A running job locked longer than the stall timeout goes back to pending,
    /// keeping the attempt it consumed. If that attempt was its last, it is parked
    /// instead.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of jobs released or parked
    /// - `Err(AppError)` - Database error
    pub async fn recover_stalled(&self, now: DateTime<Utc>) -> Result<usize, AppError> {
        let repo = IngestionJobRepository::new(self.db);
        let cutoff = shift(now, self.stall_timeout, Shift::Earlier)?;
        let mut recovered = 0;

        for job in repo.find_stalled(cutoff).await? {
            let changed = if job.attempts >= job.max_attempts {
                repo.park(job.id, job.attempts, "Worker stalled on final attempt", now)
                    .await?
            } else {
                repo.reschedule(job.id, job.attempts, now, "Worker stalled", now)
                    .await?
            };

            if changed {
                tracing::warn!(
                    job_id = job.id,
                    job_key = %job.job_key,
                    attempt = job.attempts,
                    "Recovered stalled ingestion job"
                );
                recovered += 1;
            }
        }

        Ok(recovered)
    }

    /// Lists parked jobs for operator inspection.
    pub async fn parked(&self) -> Result<Vec<entity::ingestion_job::Model>, AppError> {
        Ok(IngestionJobRepository::new(self.db).get_parked().await?)
    }
}

enum Shift {
    Earlier,
    Later,
}

/// Moves `now` by `duration`, failing instead of overflowing the timestamp range.
fn shift(
    now: DateTime<Utc>,
    duration: Duration,
    direction: Shift,
) -> Result<DateTime<Utc>, AppError> {
    let shifted = TimeDelta::from_std(duration).ok().and_then(|delta| match direction {
        Shift::Earlier => now.checked_sub_signed(delta),
        Shift::Later => now.checked_add_signed(delta),
    });

    shifted.ok_or_else(|| {
        AppError::InternalError(format!("Queue interval {:?} is out of range", duration))
    })
}
