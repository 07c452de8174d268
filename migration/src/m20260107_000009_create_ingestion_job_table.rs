use sea_orm_migration::{prelude::*, schema::*};

/// Dedup key is only unique among live jobs; parked `failed` rows may share it.
const CREATE_LIVE_KEY_INDEX: &str = "CREATE UNIQUE INDEX IF NOT EXISTS \
     idx_ingestion_job_live_key ON ingestion_job (job_key) \
     WHERE status IN ('pending', 'running')";

const DROP_LIVE_KEY_INDEX: &str = "DROP INDEX IF EXISTS idx_ingestion_job_live_key";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(IngestionJob::Table)
                    .if_not_exists()
                    .col(pk_auto(IngestionJob::Id))
                    .col(string(IngestionJob::JobKey))
                    .col(integer(IngestionJob::TenantId))
                    .col(string(IngestionJob::ClanTag))
                    .col(string_len(IngestionJob::Status, 16))
                    .col(integer(IngestionJob::Attempts).default(0))
                    .col(integer(IngestionJob::MaxAttempts))
                    .col(timestamp_with_time_zone(IngestionJob::RunAt))
                    .col(timestamp_with_time_zone_null(IngestionJob::LockedAt))
                    .col(text_null(IngestionJob::LastError))
                    .col(timestamp_with_time_zone(IngestionJob::CreatedAt))
                    .col(timestamp_with_time_zone(IngestionJob::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(CREATE_LIVE_KEY_INDEX)
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_ingestion_job_status_run_at")
                    .table(IngestionJob::Table)
                    .col(IngestionJob::Status)
                    .col(IngestionJob::RunAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(DROP_LIVE_KEY_INDEX)
            .await?;

        manager
            .drop_table(Table::drop().table(IngestionJob::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum IngestionJob {
    Table,
    Id,
    JobKey,
    TenantId,
    ClanTag,
    Status,
    Attempts,
    MaxAttempts,
    RunAt,
    LockedAt,
    LastError,
    CreatedAt,
    UpdatedAt,
}
