use super::*;

async fn running_job(
    db: &sea_orm::DatabaseConnection,
) -> Result<(entity::tenant::Model, entity::ingestion_job::Model), DbErr> {
    let tenant = factory::create_tenant(db).await?;
    let job =
        factory::ingestion_job::IngestionJobFactory::new(db, tenant.id, tenant.clan_tag.clone())
            .status(JobStatus::Running)
            .attempts(1)
            .locked_at(Some(Utc::now()))
            .build()
            .await?;

    Ok((tenant, job))
}

/// Tests returning a failed attempt to the queue.
///
/// Expected: Ok(true) with pending status, new run_at, and the error recorded
#[tokio::test]
async fn reschedule_returns_job_to_pending() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, job) = running_job(db).await?;
    let run_at = Utc::now() + Duration::seconds(5);

    let repo = IngestionJobRepository::new(db);
    assert!(repo
        .reschedule(job.id, job.attempts, run_at, "upstream timeout", Utc::now())
        .await?);

    let stored = repo.find_by_id(job.id).await?.unwrap();
    assert_eq!(stored.status, JobStatus::Pending);
    assert_eq!(stored.run_at.timestamp_millis(), run_at.timestamp_millis());
    assert_eq!(stored.last_error.as_deref(), Some("upstream timeout"));
    assert!(stored.locked_at.is_none());
    assert_eq!(stored.attempts, 1);

    Ok(())
}

/// Tests parking a job and listing parked jobs.
///
/// Expected: Ok(true) with the job listed as failed
#[tokio::test]
async fn park_moves_job_to_failed() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, job) = running_job(db).await?;

    let repo = IngestionJobRepository::new(db);
    assert!(repo.park(job.id, job.attempts, "boom", Utc::now()).await?);
    assert!(!repo.park(job.id, job.attempts, "boom", Utc::now()).await?);

    let parked = repo.get_parked().await?;
    assert_eq!(parked.len(), 1);
    assert_eq!(parked[0].id, job.id);
    assert_eq!(parked[0].status, JobStatus::Failed);

    Ok(())
}

/// Tests completing a job after earlier parked failures for the same clan.
///
/// Verifies that the finished row and stale failures are removed together.
///
/// Expected: Ok with no rows left for the key
#[tokio::test]
async fn complete_removes_job_and_parked_failures() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (tenant, job) = running_job(db).await?;
    factory::ingestion_job::IngestionJobFactory::new(db, tenant.id, tenant.clan_tag.clone())
        .status(JobStatus::Failed)
        .attempts(3)
        .build()
        .await?;

    let repo = IngestionJobRepository::new(db);
    assert!(repo.complete(job.id, job.attempts, &job.job_key).await?);

    assert!(repo.get_by_key(&job.job_key).await?.is_empty());

    Ok(())
}

/// Tests detecting jobs whose worker stopped heartbeating.
///
/// Expected: Ok with only the job locked before the cutoff
#[tokio::test]
async fn find_stalled_uses_lock_age() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stale_tenant = factory::create_tenant(db).await?;
    let stale = factory::ingestion_job::IngestionJobFactory::new(
        db,
        stale_tenant.id,
        stale_tenant.clan_tag.clone(),
    )
    .status(JobStatus::Running)
    .locked_at(Some(Utc::now() - Duration::minutes(30)))
    .build()
    .await?;
    running_job(db).await?;

    let repo = IngestionJobRepository::new(db);
    let stalled = repo.find_stalled(Utc::now() - Duration::minutes(5)).await?;

    assert_eq!(stalled.iter().map(|j| j.id).collect::<Vec<_>>(), vec![stale.id]);

    Ok(())
}

/// Tests transitions issued with an attempt count the row no longer has.
///
/// Simulates a worker whose job was recovered and claimed again: every transition
/// keyed on its old attempt count must leave the newer claim untouched.
///
/// Expected: Ok(false) for complete, reschedule and park; row unchanged
#[tokio::test]
async fn transitions_with_stale_attempt_are_rejected() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let tenant = factory::create_tenant(db).await?;
    let job =
        factory::ingestion_job::IngestionJobFactory::new(db, tenant.id, tenant.clan_tag.clone())
            .status(JobStatus::Running)
            .attempts(2)
            .locked_at(Some(Utc::now()))
            .build()
            .await?;

    let repo = IngestionJobRepository::new(db);
    assert!(!repo.complete(job.id, 1, &job.job_key).await?);
    assert!(!repo.reschedule(job.id, 1, Utc::now(), "late", Utc::now()).await?);
    assert!(!repo.park(job.id, 1, "late", Utc::now()).await?);

    let stored = repo.find_by_id(job.id).await?.unwrap();
    assert_eq!(stored.status, JobStatus::Running);
    assert_eq!(stored.attempts, 2);
    assert!(stored.last_error.is_none());

    Ok(())
}
