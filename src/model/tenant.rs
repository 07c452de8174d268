use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RegisterTenantDto {
    pub clan_tag: String,
    /// Overrides the clan description fetched from upstream.
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TenantDto {
    pub id: i32,
    pub clan_tag: String,
    pub clan_name: String,
    pub clan_level: i32,
    pub member_count: i32,
    pub description: Option<String>,
    pub is_active: bool,
    pub last_synced_at: Option<DateTime<Utc>>,
}
