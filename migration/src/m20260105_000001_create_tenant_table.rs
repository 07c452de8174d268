use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tenant::Table)
                    .if_not_exists()
                    .col(pk_auto(Tenant::Id))
                    .col(string_uniq(Tenant::ClanTag))
                    .col(string(Tenant::ClanName))
                    .col(integer(Tenant::ClanLevel).default(0))
                    .col(integer(Tenant::MemberCount).default(0))
                    .col(string_null(Tenant::Description))
                    .col(boolean(Tenant::IsActive).default(true))
                    .col(boolean(Tenant::IsDeleted).default(false))
                    .col(timestamp_with_time_zone_null(Tenant::LastSyncedAt))
                    .col(timestamp_with_time_zone(Tenant::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tenant::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Tenant {
    Table,
    Id,
    ClanTag,
    ClanName,
    ClanLevel,
    MemberCount,
    Description,
    IsActive,
    IsDeleted,
    LastSyncedAt,
    CreatedAt,
}
