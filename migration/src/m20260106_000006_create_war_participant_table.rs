use sea_orm_migration::{prelude::*, schema::*};

use super::m20260106_000005_create_war_table::War;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WarParticipant::Table)
                    .if_not_exists()
                    .col(pk_auto(WarParticipant::Id))
                    .col(integer(WarParticipant::WarId))
                    .col(string(WarParticipant::PlayerTag))
                    .col(string(WarParticipant::PlayerName))
                    .col(integer(WarParticipant::TownHallLevel).default(0))
                    .col(integer(WarParticipant::MapPosition).default(0))
                    .col(integer(WarParticipant::AttacksUsed).default(0))
                    .col(integer(WarParticipant::OpponentAttacksReceived).default(0))
                    .col(json_null(WarParticipant::BestOpponentAttack))
                    .col(timestamp_with_time_zone(WarParticipant::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_war_participant_war_id")
                            .from(WarParticipant::Table, WarParticipant::WarId)
                            .to(War::Table, War::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_war_participant_war_player_unique")
                            .col(WarParticipant::WarId)
                            .col(WarParticipant::PlayerTag),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WarParticipant::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum WarParticipant {
    Table,
    Id,
    WarId,
    PlayerTag,
    PlayerName,
    TownHallLevel,
    MapPosition,
    AttacksUsed,
    OpponentAttacksReceived,
    BestOpponentAttack,
    UpdatedAt,
}
