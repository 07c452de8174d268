use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    coc::ClanDataSource,
    data::{
        attack::AttackRepository, tenant::TenantRepository, war::WarRepository,
        war_participant::WarParticipantRepository,
    },
    error::AppError,
    model::{
        ingestion::{ClanIngestionJob, IngestionOutcome},
        war::WarSnapshot,
    },
};

/// Merges one clan's current war into the store.
pub struct IngestionWorker<'a, S: ClanDataSource + ?Sized> {
    db: &'a DatabaseConnection,
    source: &'a S,
}

impl<'a, S: ClanDataSource + ?Sized> IngestionWorker<'a, S> {
    pub fn new(db: &'a DatabaseConnection, source: &'a S) -> Self {
        Self { db, source }
    }

    /// Runs one ingestion job.
    ///
    /// Steps are committed one at a time: the war upsert, one upsert per participant,
    /// one insert-if-absent per attack, then the tenant sync stamp. Any error stops the
    /// run with earlier steps kept; since every step is keyed on a natural key,
    /// re-running the job from the start converges to the same rows.
    ///
    /// # Arguments
    /// - `job` - Claimed job naming the tenant and canonical clan tag
    ///
    /// # Returns
    /// - `Ok(IngestionOutcome::Merged)` - War state merged
    /// - `Ok(IngestionOutcome::NotInWar)` - Nothing to merge; no rows written
    /// - `Err(AppError::FetchErr)` - Upstream read failed
    /// - `Err(AppError::InvalidPayload)` - Payload cannot be merged
    /// - `Err(AppError::DbErr)` - Database error part way through
    pub async fn process(&self, job: &ClanIngestionJob) -> Result<IngestionOutcome, AppError> {
        let payload = self.source.get_current_war(&job.clan_tag).await?;

        if payload.is_not_in_war() {
            tracing::info!(
                job_id = job.id,
                job_key = %job.job_key,
                "Clan {} is not in war",
                job.clan_tag
            );
            return Ok(IngestionOutcome::NotInWar);
        }

        let snapshot = WarSnapshot::from_payload(&job.clan_tag, &payload)?;
        let now = Utc::now();

        let war = WarRepository::new(self.db)
            .upsert_snapshot(job.tenant_id, &snapshot, now)
            .await?;

        let participants = WarParticipantRepository::new(self.db);
        for participant in &snapshot.participants {
            participants.upsert(war.id, participant, now).await?;
        }

        let attacks = AttackRepository::new(self.db);
        let mut new_attacks = 0;
        for attack in &snapshot.attacks {
            if attacks.insert_if_absent(war.id, attack, now).await? {
                new_attacks += 1;
            }
        }

        TenantRepository::new(self.db)
            .mark_synced(job.tenant_id, now)
            .await?;

        Ok(IngestionOutcome::Merged {
            war_id: war.id,
            participants: snapshot.participants.len(),
            new_attacks,
        })
    }
}
