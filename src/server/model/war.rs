//! War domain models.
//!
//! `WarSnapshot` is the merge-ready form of an upstream current-war payload. The
//! remaining types are read models returned by the war repository.

use chrono::{DateTime, Utc};
use entity::war::WarState;

use crate::{
    model::war::{AttackDto, PaginatedWarsDto, WarDetailDto, WarDto, WarParticipantDto},
    server::{
        coc::payload::{parse_upstream_time, CurrentWarPayload},
        error::AppError,
        util::tag::normalize_tag,
    },
};

/// Upstream war state parsed from its wire spelling.
pub fn parse_war_state(raw: &str) -> Option<WarState> {
    match raw {
        "preparation" => Some(WarState::Preparation),
        "inWar" => Some(WarState::InWar),
        "warEnded" => Some(WarState::WarEnded),
        "notInWar" => Some(WarState::NotInWar),
        _ => None,
    }
}

pub fn war_state_str(state: WarState) -> &'static str {
    match state {
        WarState::Preparation => "preparation",
        WarState::InWar => "inWar",
        WarState::WarEnded => "warEnded",
        WarState::NotInWar => "notInWar",
    }
}

/// Payload-owned War fields, overwritten on every poll.
#[derive(Debug, Clone)]
pub struct WarSnapshot {
    /// Natural key within the tenant.
    pub war_tag: String,
    pub state: WarState,
    pub opponent_tag: Option<String>,
    pub opponent_name: Option<String>,
    pub team_size: i32,
    /// `None` when upstream omitted it; the stored first-seen time is then kept.
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub result: Option<String>,
    pub team_stars: i32,
    pub opponent_stars: i32,
    pub team_destruction: f64,
    pub opponent_destruction: f64,
    pub raw_payload: serde_json::Value,
    pub participants: Vec<ParticipantSnapshot>,
    pub attacks: Vec<AttackSnapshot>,
}

#[derive(Debug, Clone)]
pub struct ParticipantSnapshot {
    pub player_tag: String,
    pub player_name: String,
    pub town_hall_level: i32,
    pub map_position: i32,
    pub attacks_used: i32,
    pub opponent_attacks_received: i32,
    pub best_opponent_attack: Option<serde_json::Value>,
}

#[derive(Debug, Clone)]
pub struct AttackSnapshot {
    pub attacker_tag: String,
    pub attacker_name: Option<String>,
    pub defender_tag: String,
    pub order: i32,
    pub stars: i32,
    pub destruction_percent: f64,
    pub duration: i32,
    pub is_fresh: bool,
}

impl WarSnapshot {
    /// Converts an in-war payload into a merge-ready snapshot.
    ///
    /// The natural key is the trimmed upstream `warTag` when present, otherwise
    /// `{clanTag}-{opponentTag}-{startTime millis}` built from canonical tags. Member and
    /// attack counts are recomputed from the payload arrays on every call.
    ///
    /// # Arguments
    /// - `clan_tag` - Canonical tag of the polled clan, used when the payload omits it
    /// - `payload` - Decoded current-war payload; its raw body becomes `war.raw_payload`
    ///
    /// # Returns
    /// - `Ok(WarSnapshot)` - Snapshot ready to merge
    /// - `Err(AppError::InvalidPayload)` - Unknown state, malformed tag or timestamp, or
    ///   no way to derive a stable natural key
    pub fn from_payload(
        clan_tag: &str,
        payload: &CurrentWarPayload,
    ) -> Result<Self, AppError> {
        let state = payload
            .state
            .as_deref()
            .and_then(parse_war_state)
            .ok_or_else(|| {
                AppError::InvalidPayload(format!("unknown war state {:?}", payload.state))
            })?;

        let start_time = optional_time(payload.start_time.as_deref(), "startTime")?;
        let end_time = optional_time(payload.end_time.as_deref(), "endTime")?;

        let own_tag = match payload.clan.tag.as_deref() {
            Some(tag) => payload_tag(tag)?,
            None => clan_tag.to_string(),
        };
        let opponent_tag = payload.opponent.tag.as_deref().map(payload_tag).transpose()?;

        let war_tag = match payload.war_tag.as_deref().map(str::trim) {
            Some(tag) if !tag.is_empty() => tag.to_string(),
            _ => {
                let (Some(opponent), Some(start)) = (opponent_tag.as_deref(), start_time) else {
                    return Err(AppError::InvalidPayload(
                        "war has no warTag and no opponent tag or start time to derive one"
                            .to_string(),
                    ));
                };
                format!("{}-{}-{}", own_tag, opponent, start.timestamp_millis())
            }
        };

        let mut participants = Vec::with_capacity(payload.clan.members.len());
        let mut attacks = Vec::new();

        for member in &payload.clan.members {
            let player_tag = payload_tag(&member.tag)?;

            participants.push(ParticipantSnapshot {
                player_tag: player_tag.clone(),
                player_name: member.name.clone().unwrap_or_default(),
                town_hall_level: member.townhall_level,
                map_position: member.map_position,
                attacks_used: member.attacks.len() as i32,
                opponent_attacks_received: member.opponent_attacks,
                best_opponent_attack: member.best_opponent_attack.clone(),
            });

            for attack in &member.attacks {
                let attacker_tag = if attack.attacker_tag.trim().is_empty() {
                    player_tag.clone()
                } else {
                    payload_tag(&attack.attacker_tag)?
                };

                attacks.push(AttackSnapshot {
                    attacker_tag,
                    attacker_name: None,
                    defender_tag: payload_tag(&attack.defender_tag)?,
                    order: attack.order,
                    stars: attack.stars,
                    destruction_percent: attack.destruction_percentage,
                    duration: attack.duration,
                    is_fresh: attack.is_fresh,
                });
            }
        }

        // Names come from the roster, not the attack entries
        for attack in &mut attacks {
            attack.attacker_name = participants
                .iter()
                .find(|p| p.player_tag == attack.attacker_tag && !p.player_name.is_empty())
                .map(|p| p.player_name.clone());
        }

        Ok(Self {
            war_tag,
            state,
            opponent_tag,
            opponent_name: payload.opponent.name.clone(),
            team_size: payload
                .team_size
                .unwrap_or(payload.clan.members.len() as i32),
            start_time,
            end_time,
            result: payload.result.clone(),
            team_stars: payload.clan.stars,
            opponent_stars: payload.opponent.stars,
            team_destruction: payload.clan.destruction_percentage,
            opponent_destruction: payload.opponent.destruction_percentage,
            raw_payload: payload.raw.clone(),
            participants,
            attacks,
        })
    }
}

fn payload_tag(raw: &str) -> Result<String, AppError> {
    normalize_tag(raw).map_err(|_| AppError::InvalidPayload(format!("malformed tag {:?}", raw)))
}

fn optional_time(raw: Option<&str>, field: &str) -> Result<Option<DateTime<Utc>>, AppError> {
    raw.map(|value| {
        parse_upstream_time(value)
            .ok_or_else(|| AppError::InvalidPayload(format!("malformed {} {:?}", field, value)))
    })
    .transpose()
}

/// Stored war without roster.
#[derive(Debug, Clone, PartialEq)]
pub struct War {
    pub id: i32,
    pub tenant_id: i32,
    pub war_tag: String,
    pub state: WarState,
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

impl War {
    pub fn from_entity(entity: entity::war::Model) -> Self {
        Self {
            id: entity.id,
            tenant_id: entity.tenant_id,
            war_tag: entity.war_tag,
            state: entity.state,
            opponent_tag: entity.opponent_tag,
            opponent_name: entity.opponent_name,
            team_size: entity.team_size,
            start_time: entity.start_time,
            end_time: entity.end_time,
            result: entity.result,
            team_stars: entity.team_stars,
            opponent_stars: entity.opponent_stars,
            team_destruction: entity.team_destruction,
            opponent_destruction: entity.opponent_destruction,
        }
    }

    pub fn into_dto(self) -> WarDto {
        WarDto {
            id: self.id,
            war_tag: self.war_tag,
            state: war_state_str(self.state).to_string(),
            opponent_tag: self.opponent_tag,
            opponent_name: self.opponent_name,
            team_size: self.team_size,
            start_time: self.start_time,
            end_time: self.end_time,
            result: self.result,
            team_stars: self.team_stars,
            opponent_stars: self.opponent_stars,
            team_destruction: self.team_destruction,
            opponent_destruction: self.opponent_destruction,
        }
    }
}

/// War with participants (by map position) and attacks (by order).
#[derive(Debug, Clone, PartialEq)]
pub struct WarDetail {
    pub war: War,
    pub participants: Vec<entity::war_participant::Model>,
    pub attacks: Vec<entity::attack::Model>,
}

impl WarDetail {
    pub fn into_dto(self) -> WarDetailDto {
        WarDetailDto {
            war: self.war.into_dto(),
            participants: self
                .participants
                .into_iter()
                .map(|p| WarParticipantDto {
                    player_tag: p.player_tag,
                    player_name: p.player_name,
                    town_hall_level: p.town_hall_level,
                    map_position: p.map_position,
                    attacks_used: p.attacks_used,
                    opponent_attacks_received: p.opponent_attacks_received,
                    best_opponent_attack: p.best_opponent_attack,
                })
                .collect(),
            attacks: self
                .attacks
                .into_iter()
                .map(|a| AttackDto {
                    attacker_tag: a.attacker_tag,
                    attacker_name: a.attacker_name,
                    defender_tag: a.defender_tag,
                    order: a.order,
                    stars: a.stars,
                    destruction_percent: a.destruction_percent,
                    duration: a.duration,
                    is_fresh: a.is_fresh,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WarPage {
    pub wars: Vec<War>,
    pub next_cursor: Option<i32>,
}

impl WarPage {
    pub fn into_dto(self) -> PaginatedWarsDto {
        PaginatedWarsDto {
            wars: self.wars.into_iter().map(War::into_dto).collect(),
            next_cursor: self.next_cursor,
        }
    }
}
