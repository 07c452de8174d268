//! Ingestion queue row factory.

use chrono::{DateTime, Utc};
use entity::ingestion_job::JobStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating queue rows in arbitrary states.
pub struct IngestionJobFactory<'a> {
    db: &'a DatabaseConnection,
    tenant_id: i32,
    clan_tag: String,
    status: JobStatus,
    attempts: i32,
    max_attempts: i32,
    run_at: DateTime<Utc>,
    locked_at: Option<DateTime<Utc>>,
}

impl<'a> IngestionJobFactory<'a> {
    /// Creates a new IngestionJobFactory.
    ///
    /// Defaults:
    /// - status: `JobStatus::Pending`
    /// - attempts: `0` of `3`
    /// - run_at: now
    /// - locked_at: `None`
    pub fn new(db: &'a DatabaseConnection, tenant_id: i32, clan_tag: impl Into<String>) -> Self {
        Self {
            db,
            tenant_id,
            clan_tag: clan_tag.into(),
            status: JobStatus::Pending,
            attempts: 0,
            max_attempts: 3,
            run_at: Utc::now(),
            locked_at: None,
        }
    }

    pub fn status(mut self, status: JobStatus) -> Self {
        self.status = status;
        self
    }

    pub fn attempts(mut self, attempts: i32) -> Self {
        self.attempts = attempts;
        self
    }

    pub fn max_attempts(mut self, max_attempts: i32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn run_at(mut self, run_at: DateTime<Utc>) -> Self {
        self.run_at = run_at;
        self
    }

    pub fn locked_at(mut self, locked_at: Option<DateTime<Utc>>) -> Self {
        self.locked_at = locked_at;
        self
    }

    pub async fn build(self) -> Result<entity::ingestion_job::Model, DbErr> {
        let now = Utc::now();
        entity::ingestion_job::ActiveModel {
            job_key: ActiveValue::Set(format!("clan-{}", self.clan_tag)),
            tenant_id: ActiveValue::Set(self.tenant_id),
            clan_tag: ActiveValue::Set(self.clan_tag),
            status: ActiveValue::Set(self.status),
            attempts: ActiveValue::Set(self.attempts),
            max_attempts: ActiveValue::Set(self.max_attempts),
            run_at: ActiveValue::Set(self.run_at),
            locked_at: ActiveValue::Set(self.locked_at),
            last_error: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a due pending job for the tenant's clan.
pub async fn create_job(
    db: &DatabaseConnection,
    tenant: &entity::tenant::Model,
) -> Result<entity::ingestion_job::Model, DbErr> {
    IngestionJobFactory::new(db, tenant.id, tenant.clan_tag.clone())
        .build()
        .await
}
