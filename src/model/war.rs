use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WarDto {
    pub id: i32,
    pub war_tag: String,
    /// Upstream spelling: `preparation`, `inWar`, `warEnded`, or `notInWar`.
    pub state: String,
    pub opponent_tag: Option<String>,
    pub opponent_name: Option<String>,
    pub team_size: i32,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub result: Option<String>,
    pub team_stars: i32,
    pub opponent_stars: i32,
    pub team_destruction: f64,
    pub opponent_destruction: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WarParticipantDto {
    pub player_tag: String,
    pub player_name: String,
    pub town_hall_level: i32,
    pub map_position: i32,
    pub attacks_used: i32,
    pub opponent_attacks_received: i32,
    pub best_opponent_attack: Option<serde_json::Value>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AttackDto {
    pub attacker_tag: String,
    pub attacker_name: Option<String>,
    pub defender_tag: String,
    pub order: i32,
    pub stars: i32,
    pub destruction_percent: f64,
    pub duration: i32,
    pub is_fresh: bool,
}

/// War with its roster ordered by map position and attacks ordered by sequence.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WarDetailDto {
    #[serde(flatten)]
    pub war: WarDto,
    pub participants: Vec<WarParticipantDto>,
    pub attacks: Vec<AttackDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PaginatedWarsDto {
    pub wars: Vec<WarDto>,
    /// Pass back as `cursor` to fetch the next page; absent on the last page.
    pub next_cursor: Option<i32>,
}
