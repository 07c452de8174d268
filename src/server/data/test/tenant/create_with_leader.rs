use super::*;
use crate::server::model::tenant::CreateTenantParams;
use entity::membership::Role;
use sea_orm::PaginatorTrait;

fn params(clan_tag: &str) -> CreateTenantParams {
    CreateTenantParams {
        clan_tag: clan_tag.to_string(),
        clan_name: "Home Clan".to_string(),
        clan_level: 12,
        member_count: 42,
        description: Some("Weekly wars".to_string()),
    }
}

/// Tests registering a tenant with its leader.
///
/// Verifies that the tenant and a LEADER membership for the registering user are
/// both written, and that the tenant starts active with a sync timestamp.
///
/// Expected: Ok with tenant and leader membership
#[tokio::test]
async fn creates_tenant_and_leader_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_tenant_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = TenantRepository::new(db);
    let (tenant, membership) = repo.create_with_leader(params("#ABC"), user.id).await?;

    assert_eq!(tenant.clan_tag, "#ABC");
    assert!(tenant.is_active);
    assert!(!tenant.is_deleted);
    assert!(tenant.last_synced_at.is_some());
    assert_eq!(membership.tenant_id, tenant.id);
    assert_eq!(membership.user_id, user.id);
    assert_eq!(membership.role, Role::Leader);

    Ok(())
}

/// Tests registering the same clan twice.
///
/// Verifies that the unique clan tag rejects the second registration and that no
/// membership is left behind by the failed transaction.
///
/// Expected: Err on second create, single membership
#[tokio::test]
async fn rejects_duplicate_clan_tag() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_tenant_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;

    let repo = TenantRepository::new(db);
    repo.create_with_leader(params("#ABC"), first.id).await?;
    let result = repo.create_with_leader(params("#ABC"), second.id).await;

    assert!(result.is_err());
    let memberships = entity::prelude::Membership::find().count(db).await?;
    assert_eq!(memberships, 1);

    Ok(())
}
