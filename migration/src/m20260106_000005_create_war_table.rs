use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_tenant_table::Tenant;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(War::Table)
                    .if_not_exists()
                    .col(pk_auto(War::Id))
                    .col(integer(War::TenantId))
                    .col(string(War::WarTag))
                    .col(string_len(War::State, 16))
                    .col(string_null(War::OpponentTag))
                    .col(string_null(War::OpponentName))
                    .col(integer(War::TeamSize).default(0))
                    .col(timestamp_with_time_zone(War::StartTime))
                    .col(timestamp_with_time_zone_null(War::EndTime))
                    .col(string_null(War::Result))
                    .col(integer(War::TeamStars).default(0))
                    .col(integer(War::OpponentStars).default(0))
                    .col(double(War::TeamDestruction).default(0.0))
                    .col(double(War::OpponentDestruction).default(0.0))
                    .col(json(War::RawPayload))
                    .col(boolean(War::IsDeleted).default(false))
                    .col(timestamp_with_time_zone(War::CreatedAt))
                    .col(timestamp_with_time_zone(War::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_war_tenant_id")
                            .from(War::Table, War::TenantId)
                            .to(Tenant::Table, Tenant::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Natural key used by the ingestion upsert
        manager
            .create_index(
                Index::create()
                    .name("idx_war_tenant_war_tag")
                    .table(War::Table)
                    .col(War::TenantId)
                    .col(War::WarTag)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_war_tenant_start_time")
                    .table(War::Table)
                    .col(War::TenantId)
                    .col(War::StartTime)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_war_tenant_start_time")
                    .table(War::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_war_tenant_war_tag")
                    .table(War::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(War::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum War {
    Table,
    Id,
    TenantId,
    WarTag,
    State,
    OpponentTag,
    OpponentName,
    TeamSize,
    StartTime,
    EndTime,
    Result,
    TeamStars,
    OpponentStars,
    TeamDestruction,
    OpponentDestruction,
    RawPayload,
    IsDeleted,
    CreatedAt,
    UpdatedAt,
}
