pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_tenant_table;
mod m20260105_000002_create_app_user_table;
mod m20260105_000003_create_membership_table;
mod m20260105_000004_create_player_table;
mod m20260106_000005_create_war_table;
mod m20260106_000006_create_war_participant_table;
mod m20260106_000007_create_attack_table;
mod m20260106_000008_create_war_call_table;
mod m20260107_000009_create_ingestion_job_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_tenant_table::Migration),
            Box::new(m20260105_000002_create_app_user_table::Migration),
            Box::new(m20260105_000003_create_membership_table::Migration),
            Box::new(m20260105_000004_create_player_table::Migration),
            Box::new(m20260106_000005_create_war_table::Migration),
            Box::new(m20260106_000006_create_war_participant_table::Migration),
            Box::new(m20260106_000007_create_attack_table::Migration),
            Box::new(m20260106_000008_create_war_call_table::Migration),
            Box::new(m20260107_000009_create_ingestion_job_table::Migration),
        ]
    }
}
