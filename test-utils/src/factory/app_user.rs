//! App user factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

pub struct AppUserFactory<'a> {
    db: &'a DatabaseConnection,
    username: String,
    is_platform_admin: bool,
}

impl<'a> AppUserFactory<'a> {
    /// Defaults: username `"user_{id}"`, not a platform admin.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            username: format!("user_{}", next_id()),
            is_platform_admin: false,
        }
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn platform_admin(mut self, is_platform_admin: bool) -> Self {
        self.is_platform_admin = is_platform_admin;
        self
    }

    pub async fn build(self) -> Result<entity::app_user::Model, DbErr> {
        entity::app_user::ActiveModel {
            username: ActiveValue::Set(self.username),
            is_platform_admin: ActiveValue::Set(self.is_platform_admin),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a regular user with a unique username.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::app_user::Model, DbErr> {
    AppUserFactory::new(db).build().await
}

/// Creates a platform administrator.
pub async fn create_platform_admin(
    db: &DatabaseConnection,
) -> Result<entity::app_user::Model, DbErr> {
    AppUserFactory::new(db).platform_admin(true).build().await
}
