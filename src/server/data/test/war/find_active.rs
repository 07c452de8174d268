use super::*;
use entity::war::WarState;

/// Tests selecting the current war.
///
/// Verifies that ended wars are ignored and the newest active war wins.
///
/// Expected: Ok with the most recent in-progress war
#[tokio::test]
async fn returns_newest_active_war() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let tenant = factory::create_tenant(db).await?;
    factory::war::WarFactory::new(db, tenant.id)
        .state(WarState::InWar)
        .start_time(Utc::now() - Duration::days(3))
        .build()
        .await?;
    let newest = factory::war::WarFactory::new(db, tenant.id)
        .state(WarState::Preparation)
        .start_time(Utc::now() - Duration::hours(1))
        .build()
        .await?;
    factory::war::WarFactory::new(db, tenant.id)
        .state(WarState::WarEnded)
        .start_time(Utc::now())
        .build()
        .await?;

    let repo = WarRepository::new(db);
    let active = repo.find_active(tenant.id).await?;

    assert_eq!(active.map(|w| w.id), Some(newest.id));

    Ok(())
}

/// Tests a tenant whose wars have all ended.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_active_war() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let tenant = factory::create_tenant(db).await?;
    factory::war::WarFactory::new(db, tenant.id)
        .state(WarState::WarEnded)
        .build()
        .await?;

    let repo = WarRepository::new(db);
    assert!(repo.find_active(tenant.id).await?.is_none());

    Ok(())
}

/// Tests that wars are not visible across tenants or once soft-deleted.
///
/// Expected: Ok(None) for both lookups
#[tokio::test]
async fn hides_foreign_and_deleted_wars() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (tenant, war) = factory::helpers::create_war_with_tenant(db).await?;
    let other = factory::create_tenant(db).await?;
    let deleted = factory::war::WarFactory::new(db, tenant.id)
        .is_deleted(true)
        .build()
        .await?;

    let repo = WarRepository::new(db);
    assert!(repo.find_for_tenant(other.id, war.id).await?.is_none());
    assert!(repo.find_for_tenant(tenant.id, deleted.id).await?.is_none());
    assert!(repo.find_for_tenant(tenant.id, war.id).await?.is_some());

    Ok(())
}
