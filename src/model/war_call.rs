use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WarCallDto {
    pub id: i32,
    pub war_id: i32,
    pub map_position: i32,
    pub player_tag: String,
    pub player_name: String,
    /// `active` or `cancelled`.
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CreateWarCallDto {
    pub map_position: i32,
    pub player_tag: String,
    pub player_name: String,
}
