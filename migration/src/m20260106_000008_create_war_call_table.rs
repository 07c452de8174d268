use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_tenant_table::Tenant;
use super::m20260106_000005_create_war_table::War;

/// Only one active call per base. Cancelled rows are kept and do not participate.
const CREATE_ACTIVE_POSITION_INDEX: &str = "CREATE UNIQUE INDEX IF NOT EXISTS \
     idx_war_call_active_position ON war_call (war_id, map_position) \
     WHERE status = 'active'";

const DROP_ACTIVE_POSITION_INDEX: &str = "DROP INDEX IF EXISTS idx_war_call_active_position";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WarCall::Table)
                    .if_not_exists()
                    .col(pk_auto(WarCall::Id))
                    .col(integer(WarCall::TenantId))
                    .col(integer(WarCall::WarId))
                    .col(integer(WarCall::MapPosition))
                    .col(string(WarCall::PlayerTag))
                    .col(string(WarCall::PlayerName))
                    .col(string_len(WarCall::Status, 16))
                    .col(timestamp_with_time_zone(WarCall::CreatedAt))
                    .col(timestamp_with_time_zone(WarCall::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_war_call_war_id")
                            .from(WarCall::Table, WarCall::WarId)
                            .to(War::Table, War::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_war_call_tenant_id")
                            .from(WarCall::Table, WarCall::TenantId)
                            .to(Tenant::Table, Tenant::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Partial indexes have no schema-builder form, both SQLite and Postgres accept this
        manager
            .get_connection()
            .execute_unprepared(CREATE_ACTIVE_POSITION_INDEX)
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(DROP_ACTIVE_POSITION_INDEX)
            .await?;

        manager
            .drop_table(Table::drop().table(WarCall::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum WarCall {
    Table,
    Id,
    TenantId,
    WarId,
    MapPosition,
    PlayerTag,
    PlayerName,
    Status,
    CreatedAt,
    UpdatedAt,
}
