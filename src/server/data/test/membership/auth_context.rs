use super::*;

/// Tests building the context for a user in two tenants.
///
/// Verifies that inactive memberships are returned but do not grant access.
///
/// Expected: Ok(Some) with both memberships, only the active one usable
#[tokio::test]
async fn collects_all_memberships() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_tenant_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (home, user, _) = factory::helpers::create_member(db, Role::CoLeader).await?;
    let former = factory::create_tenant(db).await?;
    factory::membership::MembershipFactory::new(db, user.id, former.id)
        .role(Role::Leader)
        .is_active(false)
        .build()
        .await?;

    let context = MembershipRepository::new(db)
        .auth_context(user.id)
        .await?
        .unwrap();

    assert_eq!(context.user_id, user.id);
    assert!(!context.is_platform_admin);
    assert_eq!(context.memberships.len(), 2);
    assert!(context.has_role(home.id, Role::CoLeader));
    assert!(context.membership(former.id).is_none());

    Ok(())
}

/// Tests an unknown user id.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_tenant_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let context = MembershipRepository::new(db).auth_context(999).await?;

    assert!(context.is_none());

    Ok(())
}

/// Tests the platform flag of an admin without memberships.
///
/// Expected: Ok(Some) with is_platform_admin and no memberships
#[tokio::test]
async fn carries_platform_admin_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_tenant_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = factory::app_user::create_platform_admin(db).await?;

    let context = MembershipRepository::new(db)
        .auth_context(admin.id)
        .await?
        .unwrap();

    assert!(context.is_platform_admin);
    assert!(context.memberships.is_empty());

    Ok(())
}
