use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::player::LinkPlayerParams;

pub struct PlayerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a verified player link. Fails on the unique tag if already linked.
    pub async fn create(&self, params: LinkPlayerParams) -> Result<entity::player::Model, DbErr> {
        let now = Utc::now();
        let (clan_tag, clan_name) = match params.player.clan {
            Some(clan) => (Some(clan.tag), Some(clan.name)),
            None => (None, None),
        };

        entity::player::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            player_tag: ActiveValue::Set(params.player_tag),
            player_name: ActiveValue::Set(params.player.name),
            town_hall_level: ActiveValue::Set(params.player.town_hall_level),
            exp_level: ActiveValue::Set(params.player.exp_level),
            trophies: ActiveValue::Set(params.player.trophies),
            clan_tag: ActiveValue::Set(clan_tag),
            clan_name: ActiveValue::Set(clan_name),
            is_verified: ActiveValue::Set(true),
            last_synced_at: ActiveValue::Set(now),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_tag(&self, player_tag: &str) -> Result<Option<entity::player::Model>, DbErr> {
        entity::prelude::Player::find()
            .filter(entity::player::Column::PlayerTag.eq(player_tag))
            .one(self.db)
            .await
    }
}
