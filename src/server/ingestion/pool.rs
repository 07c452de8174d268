use std::sync::Arc;

use chrono::Utc;
use sea_orm::DatabaseConnection;
use tokio::task::JoinHandle;

use crate::server::{
    coc::ClanDataSource,
    config::IngestionConfig,
    error::AppError,
    ingestion::{queue::JobQueue, worker::IngestionWorker},
    model::ingestion::IngestionOutcome,
};

/// Fixed set of Tokio tasks draining the ingestion queue.
pub struct WorkerPool<S: ClanDataSource + 'static> {
    db: DatabaseConnection,
    source: Arc<S>,
    config: IngestionConfig,
}

impl<S: ClanDataSource + 'static> Clone for WorkerPool<S> {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
            source: self.source.clone(),
            config: self.config.clone(),
        }
    }
}

impl<S: ClanDataSource + 'static> WorkerPool<S> {
    pub fn new(db: DatabaseConnection, source: Arc<S>, config: IngestionConfig) -> Self {
        Self { db, source, config }
    }

    /// Spawns one task per configured worker. Tasks run until the runtime shuts down.
    pub fn spawn(&self) -> Vec<JoinHandle<()>> {
        let handles = (0..self.config.workers.max(1))
            .map(|worker| {
                let pool = self.clone();
                tokio::spawn(async move { pool.run_worker(worker).await })
            })
            .collect();

        tracing::info!("Started {} ingestion workers", self.config.workers.max(1));

        handles
    }

    async fn run_worker(&self, worker: usize) {
        loop {
            match self.run_once().await {
                Ok(true) => continue,
                Ok(false) => {}
                Err(e) => tracing::error!("Ingestion worker {} failed to poll queue: {}", worker, e),
            }

            tokio::time::sleep(self.config.poll_interval).await;
        }
    }

    fn queue(&self) -> JobQueue<'_> {
        JobQueue::from_config(&self.db, &self.config)
    }

    /// Claims and runs at most one job.
    ///
    /// # Returns
    /// - `Ok(true)` - A job was claimed and completed or failed
    /// - `Ok(false)` - No job was due
    /// - `Err(AppError)` - The queue itself could not be read or updated
    pub async fn run_once(&self) -> Result<bool, AppError> {
        let queue = self.queue();

        let Some(job) = queue.claim_next(Utc::now()).await? else {
            return Ok(false);
        };

        tracing::info!(
            job_id = job.id,
            job_key = %job.job_key,
            attempt = job.attempt,
            "Ingestion job started"
        );

        match IngestionWorker::new(&self.db, self.source.as_ref())
            .process(&job)
            .await
        {
            Ok(outcome) => {
                if !queue.complete(&job).await? {
                    return Ok(true);
                }

                match outcome {
                    IngestionOutcome::Merged {
                        war_id,
                        participants,
                        new_attacks,
                    } => tracing::info!(
                        job_id = job.id,
                        job_key = %job.job_key,
                        attempt = job.attempt,
                        "Ingestion job completed: war {} with {} participants, {} new attacks",
                        war_id,
                        participants,
                        new_attacks
                    ),
                    IngestionOutcome::NotInWar => tracing::info!(
                        job_id = job.id,
                        job_key = %job.job_key,
                        attempt = job.attempt,
                        "Ingestion job completed: not in war"
                    ),
                }
            }
            Err(e) => {
                queue.fail(&job, &e.to_string(), Utc::now()).await?;
            }
        }

        Ok(true)
    }

    /// Runs jobs until none are due. Returns how many were processed.
    pub async fn drain(&self) -> Result<usize, AppError> {
        let mut processed = 0;
        while self.run_once().await? {
            processed += 1;
        }

        Ok(processed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::{coc::fake::FakeDataSource, data::ingestion_job::IngestionJobRepository};
    use entity::ingestion_job::JobStatus;
    use sea_orm::{EntityTrait, PaginatorTrait};
    use std::time::Duration;
    use test_utils::{builder::TestBuilder, factory, fixture};

    fn config() -> IngestionConfig {
        IngestionConfig {
            backoff_base: Duration::ZERO,
            backoff_max: Duration::ZERO,
            poll_interval: Duration::from_millis(10),
            ..IngestionConfig::default()
        }
    }

    #[tokio::test]
    async fn drains_queue_and_removes_completed_jobs() {
        let test = TestBuilder::new().with_migrations().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let at_war = factory::create_tenant(db).await.unwrap();
        let idle = factory::create_tenant(db).await.unwrap();
        let source = Arc::new(FakeDataSource::new());
        source.set_war(&at_war.clan_tag, fixture::war_payload::in_war(&at_war.clan_tag));
        let pool = WorkerPool::new(db.clone(), source.clone(), config());

        pool.queue().enqueue(at_war.id, &at_war.clan_tag).await.unwrap();
        pool.queue().enqueue(idle.id, &idle.clan_tag).await.unwrap();

        assert_eq!(pool.drain().await.unwrap(), 2);
        assert_eq!(source.war_requests(), 2);
        assert_eq!(entity::prelude::IngestionJob::find().count(db).await.unwrap(), 0);
        assert_eq!(entity::prelude::War::find().count(db).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn failing_clan_is_parked_without_blocking_others() {
        let test = TestBuilder::new().with_migrations().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let broken = factory::create_tenant(db).await.unwrap();
        let healthy = factory::create_tenant(db).await.unwrap();
        let source = Arc::new(FakeDataSource::new());
        source.set_failing(&broken.clan_tag, true);
        source.set_war(&healthy.clan_tag, fixture::war_payload::in_war(&healthy.clan_tag));
        let pool = WorkerPool::new(db.clone(), source.clone(), config());

        pool.queue().enqueue(broken.id, &broken.clan_tag).await.unwrap();
        pool.queue().enqueue(healthy.id, &healthy.clan_tag).await.unwrap();

        assert_eq!(pool.drain().await.unwrap(), 4);

        let parked = pool.queue().parked().await.unwrap();
        assert_eq!(parked.len(), 1);
        assert_eq!(parked[0].tenant_id, broken.id);
        assert_eq!(parked[0].attempts, 3);
        assert!(parked[0].last_error.as_deref().unwrap().contains("503"));
        assert_eq!(entity::prelude::War::find().count(db).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn recovered_clan_succeeds_on_retry() {
        let test = TestBuilder::new().with_migrations().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let tenant = factory::create_tenant(db).await.unwrap();
        let source = Arc::new(FakeDataSource::new());
        source.set_failing(&tenant.clan_tag, true);
        let pool = WorkerPool::new(db.clone(), source.clone(), config());
        pool.queue().enqueue(tenant.id, &tenant.clan_tag).await.unwrap();

        assert!(pool.run_once().await.unwrap());
        let rows = IngestionJobRepository::new(db)
            .get_by_key(&format!("clan-{}", tenant.clan_tag))
            .await
            .unwrap();
        assert_eq!(rows[0].status, JobStatus::Pending);
        assert_eq!(rows[0].attempts, 1);

        source.set_failing(&tenant.clan_tag, false);
        assert_eq!(pool.drain().await.unwrap(), 1);
        assert_eq!(entity::prelude::IngestionJob::find().count(db).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn spawned_workers_pick_up_queued_jobs() {
        let test = TestBuilder::new().with_migrations().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let tenant = factory::create_tenant(db).await.unwrap();
        let source = Arc::new(FakeDataSource::new());
        source.set_war(&tenant.clan_tag, fixture::war_payload::in_war(&tenant.clan_tag));
        let pool = WorkerPool::new(
            db.clone(),
            source.clone(),
            IngestionConfig {
                workers: 2,
                ..config()
            },
        );
        pool.queue().enqueue(tenant.id, &tenant.clan_tag).await.unwrap();

        let handles = pool.spawn();
        let mut done = false;
        for _ in 0..200 {
            if entity::prelude::IngestionJob::find().count(db).await.unwrap() == 0 {
                done = true;
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        for handle in handles {
            handle.abort();
        }

        assert!(done);
        assert_eq!(source.war_requests(), 1);
        assert_eq!(entity::prelude::War::find().count(db).await.unwrap(), 1);
    }
}
