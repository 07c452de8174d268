use crate::{model::player::PlayerDto, server::coc::payload::PlayerPayload};

/// Verified player ready to be linked to a user.
#[derive(Debug, Clone)]
pub struct LinkPlayerParams {
    pub user_id: i32,
    /// Canonical player tag.
    pub player_tag: String,
    pub player: PlayerPayload,
}

pub fn player_into_dto(entity: entity::player::Model) -> PlayerDto {
    PlayerDto {
        id: entity.id,
        player_tag: entity.player_tag,
        player_name: entity.player_name,
        town_hall_level: entity.town_hall_level,
        exp_level: entity.exp_level,
        trophies: entity.trophies,
        clan_tag: entity.clan_tag,
        clan_name: entity.clan_name,
        is_verified: entity.is_verified,
    }
}
