//! In-process `ClanDataSource` for worker and service tests.

use std::{
    collections::{HashMap, HashSet},
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
};

use async_trait::async_trait;
use serde_json::Value;

use crate::server::{
    coc::{
        payload::{
            CapitalRaidSeasonPayload, ClanPayload, CurrentWarPayload, PlayerPayload,
            WarLogEntryPayload,
        },
        ClanDataSource,
    },
    error::{fetch::FetchError, AppError},
    util::tag::normalize_tag,
};

/// Canned upstream state keyed by canonical tag.
///
/// Clans without a configured war answer `notInWar`. Unknown clans and players
/// answer 404. Tags marked failing answer 503 for every request.
#[derive(Default)]
pub struct FakeDataSource {
    wars: Mutex<HashMap<String, Value>>,
    clans: Mutex<HashMap<String, Value>>,
    players: Mutex<HashMap<String, Value>>,
    tokens: Mutex<HashMap<String, String>>,
    failing: Mutex<HashSet<String>>,
    war_requests: AtomicUsize,
}

impl FakeDataSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_war(&self, clan_tag: &str, payload: Value) {
        self.wars.lock().unwrap().insert(canonical(clan_tag), payload);
    }

    pub fn set_clan(&self, clan_tag: &str, payload: Value) {
        self.clans.lock().unwrap().insert(canonical(clan_tag), payload);
    }

    pub fn set_player(&self, player_tag: &str, payload: Value, token: &str) {
        let tag = canonical(player_tag);
        self.players.lock().unwrap().insert(tag.clone(), payload);
        self.tokens.lock().unwrap().insert(tag, token.to_string());
    }

    pub fn set_failing(&self, tag: &str, failing: bool) {
        let mut set = self.failing.lock().unwrap();
        if failing {
            set.insert(canonical(tag));
        } else {
            set.remove(&canonical(tag));
        }
    }

    /// Number of current-war reads served so far.
    pub fn war_requests(&self) -> usize {
        self.war_requests.load(Ordering::SeqCst)
    }

    fn check(&self, tag: &str) -> Result<String, AppError> {
        let tag = normalize_tag(tag)?;
        if self.failing.lock().unwrap().contains(&tag) {
            return Err(FetchError::Upstream {
                status: 503,
                reason: "inMaintenance".to_string(),
                message: "Service is temporarily unavailable".to_string(),
            }
            .into());
        }
        Ok(tag)
    }
}

fn canonical(tag: &str) -> String {
    normalize_tag(tag).unwrap()
}

fn not_found() -> AppError {
    FetchError::Upstream {
        status: 404,
        reason: "notFound".to_string(),
        message: String::new(),
    }
    .into()
}

fn decode<T: serde::de::DeserializeOwned>(value: Value) -> Result<T, AppError> {
    serde_json::from_value(value).map_err(|e| FetchError::Decode(e.to_string()).into())
}

#[async_trait]
impl ClanDataSource for FakeDataSource {
    async fn get_clan(&self, clan_tag: &str) -> Result<ClanPayload, AppError> {
        let tag = self.check(clan_tag)?;
        let clan = self.clans.lock().unwrap().get(&tag).cloned();
        decode(clan.ok_or_else(not_found)?)
    }

    async fn get_current_war(&self, clan_tag: &str) -> Result<CurrentWarPayload, AppError> {
        self.war_requests.fetch_add(1, Ordering::SeqCst);
        let tag = self.check(clan_tag)?;
        let war = self
            .wars
            .lock()
            .unwrap()
            .get(&tag)
            .cloned()
            .unwrap_or_else(test_utils::fixture::war_payload::not_in_war);
        CurrentWarPayload::from_value(war).map_err(|e| FetchError::Decode(e.to_string()).into())
    }

    async fn get_war_log(&self, clan_tag: &str) -> Result<Vec<WarLogEntryPayload>, AppError> {
        self.check(clan_tag)?;
        Ok(Vec::new())
    }

    async fn get_capital_raid_seasons(
        &self,
        clan_tag: &str,
    ) -> Result<Vec<CapitalRaidSeasonPayload>, AppError> {
        self.check(clan_tag)?;
        Ok(Vec::new())
    }

    async fn get_player(&self, player_tag: &str) -> Result<PlayerPayload, AppError> {
        let tag = self.check(player_tag)?;
        let player = self.players.lock().unwrap().get(&tag).cloned();
        decode(player.ok_or_else(not_found)?)
    }

    async fn verify_player_token(&self, player_tag: &str, token: &str) -> bool {
        let Ok(tag) = self.check(player_tag) else {
            return false;
        };
        self.tokens
            .lock()
            .unwrap()
            .get(&tag)
            .is_some_and(|expected| expected == token)
    }
}
