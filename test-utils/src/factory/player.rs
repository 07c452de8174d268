//! Linked player factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_tag;

/// Creates a verified player linked to `user_id` under `player_tag`.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Owner of the player link
/// - `player_tag` - Canonical player tag, or `None` to generate a unique one
///
/// # Returns
/// - `Ok(entity::player::Model)` - Created player entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_player(
    db: &DatabaseConnection,
    user_id: i32,
    player_tag: Option<&str>,
) -> Result<entity::player::Model, DbErr> {
    let now = Utc::now();
    let player_tag = player_tag
        .map(str::to_string)
        .unwrap_or_else(|| next_tag("P"));

    entity::player::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        player_name: ActiveValue::Set(format!("Player {}", player_tag)),
        player_tag: ActiveValue::Set(player_tag),
        town_hall_level: ActiveValue::Set(14),
        exp_level: ActiveValue::Set(200),
        trophies: ActiveValue::Set(4000),
        clan_tag: ActiveValue::Set(None),
        clan_name: ActiveValue::Set(None),
        is_verified: ActiveValue::Set(true),
        last_synced_at: ActiveValue::Set(now),
        created_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
