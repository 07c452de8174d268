use super::*;

/// Tests a request without the identity header.
///
/// Expected: Err(AuthError::MissingIdentity)
#[tokio::test]
async fn rejects_missing_identity() -> Result<(), AppError> {
    let test = TestBuilder::new().with_tenant_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let headers = HeaderMap::new();

    let result = AuthGuard::new(db, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingIdentity))
    ));

    Ok(())
}

/// Tests a header that is not a user id.
///
/// Expected: Err(AuthError::MissingIdentity)
#[tokio::test]
async fn rejects_malformed_identity() -> Result<(), AppError> {
    let test = TestBuilder::new().with_tenant_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let headers = headers_for("alice");

    let result = AuthGuard::new(db, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingIdentity))
    ));

    Ok(())
}

/// Tests an identity that does not resolve to a user.
///
/// Expected: Err(AuthError::UnknownUser)
#[tokio::test]
async fn rejects_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_tenant_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let headers = headers_for("4242");

    let result = AuthGuard::new(db, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UnknownUser(4242)))
    ));

    Ok(())
}

/// Tests membership permission for an active member.
///
/// Verifies the returned context carries the membership role and linked tag.
///
/// Expected: Ok(AuthContext)
#[tokio::test]
async fn grants_member_of_tenant() -> Result<(), AppError> {
    let test = TestBuilder::new().with_tenant_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (tenant, user, membership) = factory::helpers::create_member(db, Role::Elder).await?;
    let headers = headers_for(&user.id.to_string());

    let caller = AuthGuard::new(db, &headers)
        .require(&[Permission::Member(tenant.id)])
        .await?;

    assert_eq!(caller.user_id, user.id);
    let context = caller.membership(tenant.id).unwrap();
    assert_eq!(context.role, Role::Elder);
    assert_eq!(context.player_tag, membership.player_tag);

    Ok(())
}

/// Tests membership permission for a user of another tenant and for an inactive member.
///
/// Expected: Err(AuthError::Forbidden) for both
#[tokio::test]
async fn denies_non_member_and_inactive_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_tenant_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, outsider, _) = factory::helpers::create_member(db, Role::Leader).await?;
    let tenant = factory::create_tenant(db).await?;
    let former = factory::create_user(db).await?;
    factory::membership::MembershipFactory::new(db, former.id, tenant.id)
        .is_active(false)
        .build()
        .await?;

    for user_id in [outsider.id, former.id] {
        let headers = headers_for(&user_id.to_string());
        let result = AuthGuard::new(db, &headers)
            .require(&[Permission::Member(tenant.id)])
            .await;

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::Forbidden(_)))
        ));
    }

    Ok(())
}

/// Tests platform admin access.
///
/// Verifies that an admin passes admin and membership checks without any
/// membership, and that a tenant leader does not pass the admin check.
///
/// Expected: Ok for admin, Err(AuthError::Forbidden) for leader
#[tokio::test]
async fn platform_admin_passes_every_check() -> Result<(), AppError> {
    let test = TestBuilder::new().with_tenant_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = factory::app_user::create_platform_admin(db).await?;
    let (tenant, leader, _) = factory::helpers::create_member(db, Role::Leader).await?;

    let headers = headers_for(&admin.id.to_string());
    let caller = AuthGuard::new(db, &headers)
        .require(&[Permission::PlatformAdmin, Permission::Member(tenant.id)])
        .await?;
    assert!(caller.is_platform_admin);

    let headers = headers_for(&leader.id.to_string());
    let result = AuthGuard::new(db, &headers)
        .require(&[Permission::PlatformAdmin])
        .await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::Forbidden(_)))
    ));

    Ok(())
}
