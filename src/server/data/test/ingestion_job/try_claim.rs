use super::*;

/// Tests claiming a due pending job.
///
/// Expected: Ok(true) with the row running, locked, and one attempt counted
#[tokio::test]
async fn claims_pending_job() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let tenant = factory::create_tenant(db).await?;
    let job = factory::create_job(db, &tenant).await?;

    let repo = IngestionJobRepository::new(db);
    assert!(repo.try_claim(&job, Utc::now()).await?);

    let stored = repo.find_by_id(job.id).await?.unwrap();
    assert_eq!(stored.status, JobStatus::Running);
    assert_eq!(stored.attempts, 1);
    assert!(stored.locked_at.is_some());

    Ok(())
}

/// Tests two workers racing with the same stale candidate.
///
/// Expected: Only the first claim wins
#[tokio::test]
async fn second_claim_with_stale_candidate_loses() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let tenant = factory::create_tenant(db).await?;
    let job = factory::create_job(db, &tenant).await?;

    let repo = IngestionJobRepository::new(db);
    assert!(repo.try_claim(&job, Utc::now()).await?);
    assert!(!repo.try_claim(&job, Utc::now()).await?);

    assert_eq!(repo.find_by_id(job.id).await?.unwrap().attempts, 1);

    Ok(())
}

/// Tests that only due pending jobs are offered to workers.
///
/// Expected: Ok with only the due job
#[tokio::test]
async fn find_due_skips_future_and_running_jobs() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let due = factory::create_tenant(db).await?;
    let future = factory::create_tenant(db).await?;
    let running = factory::create_tenant(db).await?;

    let due_job = factory::create_job(db, &due).await?;
    factory::ingestion_job::IngestionJobFactory::new(db, future.id, future.clan_tag.clone())
        .run_at(Utc::now() + Duration::minutes(5))
        .build()
        .await?;
    factory::ingestion_job::IngestionJobFactory::new(db, running.id, running.clan_tag.clone())
        .status(JobStatus::Running)
        .build()
        .await?;

    let repo = IngestionJobRepository::new(db);
    let jobs = repo.find_due(Utc::now(), 10).await?;

    assert_eq!(jobs.iter().map(|j| j.id).collect::<Vec<_>>(), vec![due_job.id]);

    Ok(())
}
