//! Shared helper utilities for factory methods.
//!
//! ID generation plus convenience methods for creating entities together with the
//! rows they depend on.

use entity::membership::Role;
use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Builds a canonical tag that is unique for this test process.
///
/// Tags are `#` followed by uppercase alphanumerics, matching what the server stores.
///
/// # Arguments
/// - `prefix` - Alphanumeric prefix distinguishing the kind of tag (`"C"`, `"P"`, ...)
pub fn next_tag(prefix: &str) -> String {
    format!("#{}{}", prefix, next_id())
}

/// Creates a tenant, a user, and an active membership linking them.
///
/// The membership is linked to a freshly generated player tag.
///
/// # Arguments
/// - `db` - Database connection
/// - `role` - Role granted to the user in the tenant
///
/// # Returns
/// - `Ok((tenant, user, membership))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_member(
    db: &DatabaseConnection,
    role: Role,
) -> Result<
    (
        entity::tenant::Model,
        entity::app_user::Model,
        entity::membership::Model,
    ),
    DbErr,
> {
    let tenant = crate::factory::tenant::create_tenant(db).await?;
    let (user, membership) = create_member_of(db, tenant.id, role).await?;

    Ok((tenant, user, membership))
}

/// Creates a user with an active membership in an existing tenant.
///
/// # Arguments
/// - `db` - Database connection
/// - `tenant_id` - Tenant the user joins
/// - `role` - Role granted to the user
///
/// # Returns
/// - `Ok((user, membership))` - Created user and membership
/// - `Err(DbErr)` - Database error during creation
pub async fn create_member_of(
    db: &DatabaseConnection,
    tenant_id: i32,
    role: Role,
) -> Result<(entity::app_user::Model, entity::membership::Model), DbErr> {
    let user = crate::factory::app_user::create_user(db).await?;
    let membership = crate::factory::membership::MembershipFactory::new(db, user.id, tenant_id)
        .role(role)
        .player_tag(Some(next_tag("P")))
        .build()
        .await?;

    Ok((user, membership))
}

/// Creates a tenant with a war in the `inWar` state.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((tenant, war))` - Created tenant and war
/// - `Err(DbErr)` - Database error during creation
pub async fn create_war_with_tenant(
    db: &DatabaseConnection,
) -> Result<(entity::tenant::Model, entity::war::Model), DbErr> {
    let tenant = crate::factory::tenant::create_tenant(db).await?;
    let war = crate::factory::war::create_war(db, tenant.id).await?;

    Ok((tenant, war))
}
