//! War factory for creating ingested wars without going through the worker.

use chrono::{DateTime, Duration, Utc};
use entity::war::WarState;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::{next_id, next_tag};

/// Factory for creating test wars with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let war = WarFactory::new(&db, tenant.id)
///     .state(WarState::WarEnded)
///     .start_time(Utc::now() - Duration::days(3))
///     .build()
///     .await?;
/// ```
pub struct WarFactory<'a> {
    db: &'a DatabaseConnection,
    tenant_id: i32,
    war_tag: String,
    state: WarState,
    start_time: DateTime<Utc>,
    is_deleted: bool,
}

impl<'a> WarFactory<'a> {
    /// Creates a new WarFactory.
    ///
    /// Defaults:
    /// - war_tag: `"#W{id}"`
    /// - state: `WarState::InWar`
    /// - start_time: one hour ago
    /// - is_deleted: `false`
    pub fn new(db: &'a DatabaseConnection, tenant_id: i32) -> Self {
        Self {
            db,
            tenant_id,
            war_tag: format!("#W{}", next_id()),
            state: WarState::InWar,
            start_time: Utc::now() - Duration::hours(1),
            is_deleted: false,
        }
    }

    pub fn war_tag(mut self, war_tag: impl Into<String>) -> Self {
        self.war_tag = war_tag.into();
        self
    }

    pub fn state(mut self, state: WarState) -> Self {
        self.state = state;
        self
    }

    pub fn start_time(mut self, start_time: DateTime<Utc>) -> Self {
        self.start_time = start_time;
        self
    }

    pub fn is_deleted(mut self, is_deleted: bool) -> Self {
        self.is_deleted = is_deleted;
        self
    }

    /// Builds and inserts the war entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::war::Model)` - Created war entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::war::Model, DbErr> {
        let now = Utc::now();
        entity::war::ActiveModel {
            tenant_id: ActiveValue::Set(self.tenant_id),
            war_tag: ActiveValue::Set(self.war_tag),
            state: ActiveValue::Set(self.state),
            opponent_tag: ActiveValue::Set(Some(next_tag("O"))),
            opponent_name: ActiveValue::Set(Some("Opponent".to_string())),
            team_size: ActiveValue::Set(15),
            start_time: ActiveValue::Set(self.start_time),
            end_time: ActiveValue::Set(Some(self.start_time + Duration::hours(24))),
            result: ActiveValue::Set(None),
            team_stars: ActiveValue::Set(0),
            opponent_stars: ActiveValue::Set(0),
            team_destruction: ActiveValue::Set(0.0),
            opponent_destruction: ActiveValue::Set(0.0),
            raw_payload: ActiveValue::Set(serde_json::json!({})),
            is_deleted: ActiveValue::Set(self.is_deleted),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an in-progress war for the tenant.
pub async fn create_war(
    db: &DatabaseConnection,
    tenant_id: i32,
) -> Result<entity::war::Model, DbErr> {
    WarFactory::new(db, tenant_id).build().await
}
