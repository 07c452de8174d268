//! War call factory.
//!
//! Inserts calls directly, bypassing the reservation service. Inserting a second
//! active call for the same base fails on the migrated schema.

use chrono::Utc;
use entity::war_call::CallStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a war call in the given status.
///
/// # Arguments
/// - `db` - Database connection
/// - `war` - War the call belongs to; the tenant is taken from it
/// - `map_position` - Reserved opponent base
/// - `player_tag` - Canonical tag of the calling player
/// - `status` - Initial call status
///
/// # Returns
/// - `Ok(entity::war_call::Model)` - Created call
/// - `Err(DbErr)` - Database error, including unique violations
pub async fn create_call_with_status(
    db: &DatabaseConnection,
    war: &entity::war::Model,
    map_position: i32,
    player_tag: &str,
    status: CallStatus,
) -> Result<entity::war_call::Model, DbErr> {
    let now = Utc::now();
    entity::war_call::ActiveModel {
        tenant_id: ActiveValue::Set(war.tenant_id),
        war_id: ActiveValue::Set(war.id),
        map_position: ActiveValue::Set(map_position),
        player_tag: ActiveValue::Set(player_tag.to_string()),
        player_name: ActiveValue::Set(format!("Player {}", player_tag)),
        status: ActiveValue::Set(status),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates an active war call.
pub async fn create_call(
    db: &DatabaseConnection,
    war: &entity::war::Model,
    map_position: i32,
    player_tag: &str,
) -> Result<entity::war_call::Model, DbErr> {
    create_call_with_status(db, war, map_position, player_tag, CallStatus::Active).await
}
