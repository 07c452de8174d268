use chrono::{DateTime, Utc};
use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::server::model::war::AttackSnapshot;

pub struct AttackRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AttackRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records an attack unless `(war_id, attacker_tag, defender_tag, order)` already exists.
    ///
    /// The existence check is the unique index itself (`ON CONFLICT DO NOTHING`), so
    /// overlapping or replayed polls cannot create duplicates. Existing attacks are
    /// never updated.
    ///
    /// # Returns
    /// - `Ok(true)` - Attack was inserted
    /// - `Ok(false)` - Attack was already recorded
    /// - `Err(DbErr)` - Database error during insert
    pub async fn insert_if_absent(
        &self,
        war_id: i32,
        attack: &AttackSnapshot,
        now: DateTime<Utc>,
    ) -> Result<bool, DbErr> {
        use entity::attack::Column;

        let result = entity::prelude::Attack::insert(entity::attack::ActiveModel {
            war_id: ActiveValue::Set(war_id),
            attacker_tag: ActiveValue::Set(attack.attacker_tag.clone()),
            attacker_name: ActiveValue::Set(attack.attacker_name.clone()),
            defender_tag: ActiveValue::Set(attack.defender_tag.clone()),
            order: ActiveValue::Set(attack.order),
            stars: ActiveValue::Set(attack.stars),
            destruction_percent: ActiveValue::Set(attack.destruction_percent),
            duration: ActiveValue::Set(attack.duration),
            is_fresh: ActiveValue::Set(attack.is_fresh),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::columns([
                Column::WarId,
                Column::AttackerTag,
                Column::DefenderTag,
                Column::Order,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await;

        match result {
            Ok(rows) => Ok(rows > 0),
            Err(DbErr::RecordNotInserted) => Ok(false),
            Err(e) => Err(e),
        }
    }
}
