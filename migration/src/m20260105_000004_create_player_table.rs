use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000002_create_app_user_table::AppUser;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Player::Table)
                    .if_not_exists()
                    .col(pk_auto(Player::Id))
                    .col(integer(Player::UserId))
                    .col(string_uniq(Player::PlayerTag))
                    .col(string(Player::PlayerName))
                    .col(integer(Player::TownHallLevel))
                    .col(integer(Player::ExpLevel).default(0))
                    .col(integer(Player::Trophies).default(0))
                    .col(string_null(Player::ClanTag))
                    .col(string_null(Player::ClanName))
                    .col(boolean(Player::IsVerified).default(false))
                    .col(timestamp_with_time_zone(Player::LastSyncedAt))
                    .col(timestamp_with_time_zone(Player::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_user_id")
                            .from(Player::Table, Player::UserId)
                            .to(AppUser::Table, AppUser::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Player::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Player {
    Table,
    Id,
    UserId,
    PlayerTag,
    PlayerName,
    TownHallLevel,
    ExpLevel,
    Trophies,
    ClanTag,
    ClanName,
    IsVerified,
    LastSyncedAt,
    CreatedAt,
}
