use super::*;
use chrono::Utc;

/// Tests that only ingestible tenants are returned.
///
/// Verifies that inactive and soft-deleted tenants are excluded.
///
/// Expected: Ok with only the active tenant
#[tokio::test]
async fn excludes_inactive_and_deleted_tenants() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_tenant_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let active = factory::create_tenant(db).await?;
    factory::tenant::TenantFactory::new(db)
        .is_active(false)
        .build()
        .await?;
    factory::tenant::TenantFactory::new(db)
        .is_deleted(true)
        .build()
        .await?;

    let repo = TenantRepository::new(db);
    let tenants = repo.get_active().await?;

    assert_eq!(tenants.len(), 1);
    assert_eq!(tenants[0].id, active.id);

    Ok(())
}

/// Tests stamping the last sync time.
///
/// Expected: Ok with last_synced_at updated
#[tokio::test]
async fn marks_tenant_synced() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_tenant_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let tenant = factory::create_tenant(db).await?;
    let at = Utc::now();

    let repo = TenantRepository::new(db);
    repo.mark_synced(tenant.id, at).await?;

    let stored = entity::prelude::Tenant::find_by_id(tenant.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(
        stored.last_synced_at.map(|t| t.timestamp_millis()),
        Some(at.timestamp_millis())
    );

    Ok(())
}
