//! Upstream game API response shapes.
//!
//! Deserialization is lenient: upstream omits fields depending on war state and
//! API version, so nearly everything defaults instead of failing the decode.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Timestamp format used by upstream, e.g. `20230723T040000.000Z`.
const UPSTREAM_TIME_FORMAT: &str = "%Y%m%dT%H%M%S%.fZ";

/// Parses an upstream timestamp.
///
/// # Returns
/// - `Some(DateTime<Utc>)` - Parsed instant
/// - `None` - Malformed input
pub fn parse_upstream_time(raw: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(raw.trim(), UPSTREAM_TIME_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ClanPayload {
    pub tag: String,
    pub name: String,
    pub clan_level: i32,
    /// Member count.
    pub members: i32,
    pub description: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CurrentWarPayload {
    /// `preparation`, `inWar`, `warEnded`, or `notInWar`. Missing means not in war.
    pub state: Option<String>,
    pub war_tag: Option<String>,
    pub team_size: Option<i32>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub result: Option<String>,
    pub clan: WarClanPayload,
    pub opponent: WarClanPayload,
    /// Body exactly as received; stored as `war.raw_payload`.
    #[serde(skip)]
    pub raw: serde_json::Value,
}

impl CurrentWarPayload {
    /// Decodes a response body, keeping the original JSON alongside the typed view.
    pub fn from_value(raw: serde_json::Value) -> Result<Self, serde_json::Error> {
        let mut payload: Self = serde_json::from_value(raw.clone())?;
        payload.raw = raw;
        Ok(payload)
    }

    /// True for an absent or `notInWar` state.
    pub fn is_not_in_war(&self) -> bool {
        matches!(self.state.as_deref(), None | Some("notInWar"))
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct WarClanPayload {
    pub tag: Option<String>,
    pub name: Option<String>,
    pub stars: i32,
    pub destruction_percentage: f64,
    pub members: Vec<WarMemberPayload>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct WarMemberPayload {
    pub tag: String,
    pub name: Option<String>,
    pub townhall_level: i32,
    pub map_position: i32,
    pub attacks: Vec<WarAttackPayload>,
    /// Defenses against this member; upstream sends a count or, in older shapes, a list.
    #[serde(deserialize_with = "count_or_len")]
    pub opponent_attacks: i32,
    pub best_opponent_attack: Option<serde_json::Value>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct WarAttackPayload {
    pub attacker_tag: String,
    pub defender_tag: String,
    pub order: i32,
    pub stars: i32,
    pub destruction_percentage: f64,
    pub duration: i32,
    pub is_fresh: bool,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerPayload {
    pub tag: String,
    pub name: String,
    pub town_hall_level: i32,
    pub exp_level: i32,
    pub trophies: i32,
    pub clan: Option<PlayerClanPayload>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct PlayerClanPayload {
    pub tag: String,
    pub name: String,
}

/// Paged list envelope used by the war log and capital raid endpoints.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct PagedPayload<T> {
    pub items: Vec<T>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct WarLogEntryPayload {
    pub result: Option<String>,
    pub end_time: Option<String>,
    pub team_size: i32,
    pub clan: WarClanPayload,
    pub opponent: WarClanPayload,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CapitalRaidSeasonPayload {
    pub state: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub capital_total_loot: i64,
    pub raids_completed: i32,
    pub total_attacks: i32,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct VerifyTokenPayload {
    pub status: String,
}

/// Error body upstream sends with non-2xx responses.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct UpstreamErrorPayload {
    pub reason: String,
    pub message: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CountOrList {
    Count(i32),
    List(Vec<serde_json::Value>),
}

fn count_or_len<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<CountOrList>::deserialize(deserializer)? {
        Some(CountOrList::Count(count)) => count,
        Some(CountOrList::List(items)) => items.len() as i32,
        None => 0,
    })
}
