use super::*;

/// Tests reserving a free base.
///
/// Expected: Ok with an active call
#[tokio::test]
async fn creates_active_call() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (tenant, war) = factory::helpers::create_war_with_tenant(db).await?;

    let repo = WarCallRepository::new(db);
    let call = repo
        .create(tenant.id, war.id, 3, "#P1".to_string(), "Alpha".to_string())
        .await?;

    assert_eq!(call.status, CallStatus::Active);
    assert_eq!(call.map_position, 3);
    assert_eq!(call.tenant_id, tenant.id);

    Ok(())
}

/// Tests reserving a base that already has an active call.
///
/// Expected: Err from the unique index
#[tokio::test]
async fn rejects_second_active_call_on_base() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (tenant, war) = factory::helpers::create_war_with_tenant(db).await?;
    factory::create_call(db, &war, 3, "#P1").await?;

    let repo = WarCallRepository::new(db);
    let result = repo
        .create(tenant.id, war.id, 3, "#P2".to_string(), "Bravo".to_string())
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Tests reserving a base whose previous call was cancelled.
///
/// Expected: Ok with a new active call
#[tokio::test]
async fn allows_call_after_cancellation() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (tenant, war) = factory::helpers::create_war_with_tenant(db).await?;
    factory::war_call::create_call_with_status(db, &war, 3, "#P1", CallStatus::Cancelled)
        .await?;

    let repo = WarCallRepository::new(db);
    let call = repo
        .create(tenant.id, war.id, 3, "#P2".to_string(), "Bravo".to_string())
        .await?;

    assert_eq!(call.status, CallStatus::Active);

    Ok(())
}

/// Tests listing calls for a war.
///
/// Verifies that cancelled calls are excluded and active calls come back by map
/// position.
///
/// Expected: Ok with positions [1, 4]
#[tokio::test]
async fn lists_active_calls_by_position() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (tenant, war) = factory::helpers::create_war_with_tenant(db).await?;
    factory::create_call(db, &war, 4, "#P1").await?;
    factory::create_call(db, &war, 1, "#P2").await?;
    factory::war_call::create_call_with_status(db, &war, 2, "#P3", CallStatus::Cancelled)
        .await?;

    let repo = WarCallRepository::new(db);
    let calls = repo.get_active_by_war(tenant.id, war.id).await?;

    assert_eq!(
        calls.iter().map(|c| c.map_position).collect::<Vec<_>>(),
        vec![1, 4]
    );

    Ok(())
}
