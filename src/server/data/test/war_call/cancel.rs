use super::*;
use chrono::Duration;

/// Tests cancelling an active call.
///
/// Expected: Ok with cancelled status and bumped updated_at
#[tokio::test]
async fn cancels_active_call() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, war) = factory::helpers::create_war_with_tenant(db).await?;
    let call = factory::create_call(db, &war, 1, "#P1").await?;
    let now = Utc::now() + Duration::seconds(5);

    let repo = WarCallRepository::new(db);
    let cancelled = repo.cancel(call.id, now).await?.unwrap();

    assert_eq!(cancelled.status, CallStatus::Cancelled);
    assert_eq!(cancelled.updated_at.timestamp_millis(), now.timestamp_millis());

    Ok(())
}

/// Tests cancelling a call twice.
///
/// Verifies that the second cancel does not move `updated_at`.
///
/// Expected: Ok with the first cancellation preserved
#[tokio::test]
async fn second_cancel_leaves_call_unchanged() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, war) = factory::helpers::create_war_with_tenant(db).await?;
    let call = factory::create_call(db, &war, 1, "#P1").await?;
    let first_at = Utc::now();

    let repo = WarCallRepository::new(db);
    repo.cancel(call.id, first_at).await?;
    let again = repo
        .cancel(call.id, first_at + Duration::minutes(1))
        .await?
        .unwrap();

    assert_eq!(again.status, CallStatus::Cancelled);
    assert_eq!(again.updated_at.timestamp_millis(), first_at.timestamp_millis());

    Ok(())
}

/// Tests that lookups are scoped to the tenant and war.
///
/// Expected: Ok(None) for a mismatched tenant
#[tokio::test]
async fn find_is_scoped_to_tenant() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (tenant, war) = factory::helpers::create_war_with_tenant(db).await?;
    let other = factory::create_tenant(db).await?;
    let call = factory::create_call(db, &war, 1, "#P1").await?;

    let repo = WarCallRepository::new(db);
    assert!(repo.find(other.id, war.id, call.id).await?.is_none());
    assert!(repo.find(tenant.id, war.id, call.id).await?.is_some());

    Ok(())
}
