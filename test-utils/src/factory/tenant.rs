//! Tenant factory for creating registered clans in tests.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::{next_id, next_tag};

/// Factory for creating test tenants with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let tenant = TenantFactory::new(&db)
///     .clan_tag("#ABC")
///     .is_deleted(true)
///     .build()
///     .await?;
/// ```
pub struct TenantFactory<'a> {
    db: &'a DatabaseConnection,
    clan_tag: String,
    clan_name: String,
    is_active: bool,
    is_deleted: bool,
}

impl<'a> TenantFactory<'a> {
    /// Creates a new TenantFactory with default values.
    ///
    /// Defaults:
    /// - clan_tag: `"#C{id}"`
    /// - clan_name: `"Clan {id}"`
    /// - is_active: `true`
    /// - is_deleted: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            clan_tag: format!("#C{}", id),
            clan_name: format!("Clan {}", id),
            is_active: true,
            is_deleted: false,
        }
    }

    pub fn clan_tag(mut self, clan_tag: impl Into<String>) -> Self {
        self.clan_tag = clan_tag.into();
        self
    }

    pub fn clan_name(mut self, clan_name: impl Into<String>) -> Self {
        self.clan_name = clan_name.into();
        self
    }

    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub fn is_deleted(mut self, is_deleted: bool) -> Self {
        self.is_deleted = is_deleted;
        self
    }

    /// Builds and inserts the tenant entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::tenant::Model)` - Created tenant entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::tenant::Model, DbErr> {
        entity::tenant::ActiveModel {
            clan_tag: ActiveValue::Set(self.clan_tag),
            clan_name: ActiveValue::Set(self.clan_name),
            clan_level: ActiveValue::Set(10),
            member_count: ActiveValue::Set(30),
            description: ActiveValue::Set(None),
            is_active: ActiveValue::Set(self.is_active),
            is_deleted: ActiveValue::Set(self.is_deleted),
            last_synced_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active tenant with a unique clan tag.
///
/// Shorthand for `TenantFactory::new(db).build().await`.
pub async fn create_tenant(db: &DatabaseConnection) -> Result<entity::tenant::Model, DbErr> {
    TenantFactory::new(db).build().await
}

/// Creates an active tenant with a unique clan tag and the given name prefix.
pub async fn create_tenant_named(
    db: &DatabaseConnection,
    clan_name: &str,
) -> Result<entity::tenant::Model, DbErr> {
    TenantFactory::new(db)
        .clan_tag(next_tag("C"))
        .clan_name(clan_name)
        .build()
        .await
}
