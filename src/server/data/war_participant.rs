use chrono::{DateTime, Utc};
use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::server::model::war::ParticipantSnapshot;

pub struct WarParticipantRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WarParticipantRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts or overwrites the participant keyed by `(war_id, player_tag)`.
    ///
    /// Values are a point-in-time snapshot; the last write wins.
    pub async fn upsert(
        &self,
        war_id: i32,
        participant: &ParticipantSnapshot,
        now: DateTime<Utc>,
    ) -> Result<entity::war_participant::Model, DbErr> {
        use entity::war_participant::Column;

        entity::prelude::WarParticipant::insert(entity::war_participant::ActiveModel {
            war_id: ActiveValue::Set(war_id),
            player_tag: ActiveValue::Set(participant.player_tag.clone()),
            player_name: ActiveValue::Set(participant.player_name.clone()),
            town_hall_level: ActiveValue::Set(participant.town_hall_level),
            map_position: ActiveValue::Set(participant.map_position),
            attacks_used: ActiveValue::Set(participant.attacks_used),
            opponent_attacks_received: ActiveValue::Set(participant.opponent_attacks_received),
            best_opponent_attack: ActiveValue::Set(participant.best_opponent_attack.clone()),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::columns([Column::WarId, Column::PlayerTag])
                .update_columns([
                    Column::PlayerName,
                    Column::TownHallLevel,
                    Column::MapPosition,
                    Column::AttacksUsed,
                    Column::OpponentAttacksReceived,
                    Column::BestOpponentAttack,
                    Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await
    }
}
