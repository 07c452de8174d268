use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Parked ingestion job as shown to operators.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct IngestionJobDto {
    pub id: i32,
    pub job_key: String,
    pub tenant_id: i32,
    pub clan_tag: String,
    pub status: String,
    pub attempts: i32,
    pub max_attempts: i32,
    pub run_at: DateTime<Utc>,
    pub last_error: Option<String>,
    pub updated_at: DateTime<Utc>,
}
