use sea_orm::DatabaseConnection;

use crate::server::{
    coc::{payload::PlayerClanPayload, ClanDataSource},
    data::player::PlayerRepository,
    error::AppError,
    model::player::LinkPlayerParams,
    util::tag::normalize_tag,
};

pub struct PlayerService<'a, S: ClanDataSource + ?Sized> {
    db: &'a DatabaseConnection,
    source: &'a S,
}

impl<'a, S: ClanDataSource + ?Sized> PlayerService<'a, S> {
    pub fn new(db: &'a DatabaseConnection, source: &'a S) -> Self {
        Self { db, source }
    }

    /// Links an in-game account to a user after proving ownership.
    ///
    /// Ownership is proven with the player's one-time API token. A token that fails
    /// verification for any reason, including upstream errors, is rejected.
    ///
    /// # Returns
    /// - `Ok(entity::player::Model)` - Linked, verified player
    /// - `Err(AppError::BadRequest)` - Malformed tag or failed verification
    /// - `Err(AppError::FetchErr)` - Player lookup failed after verification
    /// - `Err(AppError::Conflict)` - Player already linked to some account
    pub async fn link_player(
        &self,
        user_id: i32,
        player_tag: &str,
        api_token: &str,
    ) -> Result<entity::player::Model, AppError> {
        let player_tag = normalize_tag(player_tag)?;

        if !self.source.verify_player_token(&player_tag, api_token).await {
            return Err(AppError::BadRequest("Player verification failed".to_string()));
        }

        let mut player = self.source.get_player(&player_tag).await?;
        player.clan = player.clan.map(|clan| PlayerClanPayload {
            tag: normalize_tag(&clan.tag).unwrap_or(clan.tag),
            name: clan.name,
        });

        let linked = PlayerRepository::new(self.db)
            .create(LinkPlayerParams {
                user_id,
                player_tag,
                player,
            })
            .await
            .map_err(|e| {
                AppError::conflict_on_unique(e, "This player is already linked to an account")
            })?;

        Ok(linked)
    }
}
