use super::*;

/// Tests queueing a job for a clan with no live job.
///
/// Expected: Ok(true) with a pending row keyed by the clan tag
#[tokio::test]
async fn queues_pending_job() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let tenant = factory::create_tenant(db).await?;

    let repo = IngestionJobRepository::new(db);
    let queued = repo.enqueue(tenant.id, &tenant.clan_tag, 3, Utc::now()).await?;

    assert!(queued);
    let rows = repo.get_by_key(&format!("clan-{}", tenant.clan_tag)).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].status, JobStatus::Pending);
    assert_eq!(rows[0].attempts, 0);
    assert_eq!(rows[0].max_attempts, 3);

    Ok(())
}

/// Tests that a pending or running job blocks another with the same key.
///
/// Expected: Ok(false) and still a single row
#[tokio::test]
async fn dedups_live_jobs() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pending = factory::create_tenant(db).await?;
    let running = factory::create_tenant(db).await?;
    factory::ingestion_job::IngestionJobFactory::new(db, running.id, running.clan_tag.clone())
        .status(JobStatus::Running)
        .locked_at(Some(Utc::now()))
        .build()
        .await?;

    let repo = IngestionJobRepository::new(db);
    assert!(repo.enqueue(pending.id, &pending.clan_tag, 3, Utc::now()).await?);
    assert!(!repo.enqueue(pending.id, &pending.clan_tag, 3, Utc::now()).await?);
    assert!(!repo.enqueue(running.id, &running.clan_tag, 3, Utc::now()).await?);

    assert_eq!(repo.get_by_key(&format!("clan-{}", pending.clan_tag)).await?.len(), 1);
    assert_eq!(repo.get_by_key(&format!("clan-{}", running.clan_tag)).await?.len(), 1);

    Ok(())
}

/// Tests that a parked failure does not block a fresh job.
///
/// Expected: Ok(true) with the failed row kept alongside the new one
#[tokio::test]
async fn parked_job_does_not_block_key() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let tenant = factory::create_tenant(db).await?;
    factory::ingestion_job::IngestionJobFactory::new(db, tenant.id, tenant.clan_tag.clone())
        .status(JobStatus::Failed)
        .attempts(3)
        .build()
        .await?;

    let repo = IngestionJobRepository::new(db);
    assert!(repo.enqueue(tenant.id, &tenant.clan_tag, 3, Utc::now()).await?);

    let rows = repo.get_by_key(&format!("clan-{}", tenant.clan_tag)).await?;
    assert_eq!(rows.len(), 2);

    Ok(())
}
