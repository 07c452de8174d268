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
                    .table(Attack::Table)
                    .if_not_exists()
                    .col(pk_auto(Attack::Id))
                    .col(integer(Attack::WarId))
                    .col(string(Attack::AttackerTag))
                    .col(string_null(Attack::AttackerName))
                    .col(string(Attack::DefenderTag))
                    .col(integer(Attack::Order))
                    .col(integer(Attack::Stars).default(0))
                    .col(double(Attack::DestructionPercent).default(0.0))
                    .col(integer(Attack::Duration).default(0))
                    .col(boolean(Attack::IsFresh).default(false))
                    .col(timestamp_with_time_zone(Attack::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_attack_war_id")
                            .from(Attack::Table, Attack::WarId)
                            .to(War::Table, War::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_attack_war_attacker_defender_order_unique")
                            .col(Attack::WarId)
                            .col(Attack::AttackerTag)
                            .col(Attack::DefenderTag)
                            .col(Attack::Order),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Attack::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Attack {
    Table,
    Id,
    WarId,
    AttackerTag,
    AttackerName,
    DefenderTag,
    Order,
    Stars,
    DestructionPercent,
    Duration,
    IsFresh,
    CreatedAt,
}
