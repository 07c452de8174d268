use chrono::Utc;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    config::IngestionConfig,
    data::tenant::TenantRepository,
    error::AppError,
    ingestion::queue::JobQueue,
};

/// Starts the clan ingestion scheduler
///
/// On every tick of the configured cron expression, one ingestion job is queued per
/// active tenant. The tick only enqueues; workers pick the jobs up independently.
///
/// # Arguments
/// - `db`: Database connection
/// - `config`: Ingestion tuning (schedule, attempt budget, stall timeout)
pub async fn start_scheduler(
    db: DatabaseConnection,
    config: IngestionConfig,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let schedule = config.schedule.clone();
    let job = Job::new_async(schedule.as_str(), move |_uuid, _lock| {
        let db = db.clone();
        let config = config.clone();

        Box::pin(async move {
            enqueue_active_tenants(&db, &config).await;
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Clan ingestion scheduler started with schedule {}", schedule);

    Ok(scheduler)
}

/// Runs one scheduler tick
///
/// Enumerates active tenants and enqueues a job for each. If enumeration fails the
/// tick is skipped with nothing enqueued. Stalled jobs are released afterwards.
///
/// # Returns
/// - Number of jobs newly enqueued
pub async fn enqueue_active_tenants(db: &DatabaseConnection, config: &IngestionConfig) -> usize {
    let queue = JobQueue::from_config(db, config);

    let tenants = match TenantRepository::new(db).get_active().await {
        Ok(tenants) => tenants,
        Err(e) => {
            tracing::error!("Failed to enumerate tenants for ingestion: {}", e);
            return 0;
        }
    };

    let mut enqueued = 0;
    for tenant in &tenants {
        match queue.enqueue(tenant.id, &tenant.clan_tag).await {
            Ok(true) => enqueued += 1,
            Ok(false) => {}
            Err(e) => tracing::error!(
                "Failed to enqueue ingestion for tenant {} ({}): {}",
                tenant.id,
                tenant.clan_tag,
                e
            ),
        }
    }

    tracing::info!(
        "Enqueued {} ingestion jobs for {} active tenants",
        enqueued,
        tenants.len()
    );

    if let Err(e) = queue.recover_stalled(Utc::now()).await {
        tracing::error!("Failed to recover stalled ingestion jobs: {}", e);
    }

    enqueued
}
