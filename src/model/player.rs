use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LinkPlayerDto {
    pub player_tag: String,
    /// One-time in-game API token proving ownership of the account.
    pub api_token: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PlayerDto {
    pub id: i32,
    pub player_tag: String,
    pub player_name: String,
    pub town_hall_level: i32,
    pub exp_level: i32,
    pub trophies: i32,
    pub clan_tag: Option<String>,
    pub clan_name: Option<String>,
    pub is_verified: bool,
}
