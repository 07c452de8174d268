//! Client for the upstream game data API.
//!
//! `ClanDataSource` is the seam between the ingestion pipeline and the network:
//! `CocApiClient` implements it over HTTP, tests substitute in-process fakes.

pub mod client;
pub mod payload;

#[cfg(test)]
pub mod fake;

use async_trait::async_trait;

use crate::server::{
    coc::payload::{
        CapitalRaidSeasonPayload, ClanPayload, CurrentWarPayload, PlayerPayload,
        WarLogEntryPayload,
    },
    error::AppError,
};

pub use client::CocApiClient;

/// Read access to upstream clan and player state.
///
/// Implementations canonicalize every tag before use. Errors are `AppError::FetchErr`
/// for upstream failures and `AppError::BadRequest` for malformed tags.
#[async_trait]
pub trait ClanDataSource: Send + Sync {
    async fn get_clan(&self, clan_tag: &str) -> Result<ClanPayload, AppError>;

    /// Current war of the clan. A clan outside a war yields a `notInWar` payload.
    async fn get_current_war(&self, clan_tag: &str) -> Result<CurrentWarPayload, AppError>;

    async fn get_war_log(&self, clan_tag: &str) -> Result<Vec<WarLogEntryPayload>, AppError>;

    async fn get_capital_raid_seasons(
        &self,
        clan_tag: &str,
    ) -> Result<Vec<CapitalRaidSeasonPayload>, AppError>;

    async fn get_player(&self, player_tag: &str) -> Result<PlayerPayload, AppError>;

    /// Checks an in-game API token against the player. Any failure reads as `false`.
    async fn verify_player_token(&self, player_tag: &str, token: &str) -> bool;
}
