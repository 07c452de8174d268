use entity::ingestion_job::JobStatus;

use crate::model::ingestion::IngestionJobDto;

/// Work item handed to the ingestion worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClanIngestionJob {
    pub id: i32,
    pub job_key: String,
    pub tenant_id: i32,
    /// Canonical clan tag.
    pub clan_tag: String,
    /// Attempt number of this run, starting at 1.
    pub attempt: i32,
    pub max_attempts: i32,
}

impl ClanIngestionJob {
    pub fn from_entity(entity: &entity::ingestion_job::Model) -> Self {
        Self {
            id: entity.id,
            job_key: entity.job_key.clone(),
            tenant_id: entity.tenant_id,
            clan_tag: entity.clan_tag.clone(),
            attempt: entity.attempts,
            max_attempts: entity.max_attempts,
        }
    }
}

/// Result of a successful job run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestionOutcome {
    /// War state merged; counts are rows written by this run.
    Merged {
        war_id: i32,
        participants: usize,
        new_attacks: usize,
    },
    /// Upstream reports no current war; nothing was written.
    NotInWar,
}

/// What `fail` did with a job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureDisposition {
    Retrying { run_at: chrono::DateTime<chrono::Utc> },
    Parked,
    /// Stall recovery handed the job to another run; this failure was not recorded.
    ClaimLost,
}

pub fn job_into_dto(entity: entity::ingestion_job::Model) -> IngestionJobDto {
    IngestionJobDto {
        id: entity.id,
        job_key: entity.job_key,
        tenant_id: entity.tenant_id,
        clan_tag: entity.clan_tag,
        status: match entity.status {
            JobStatus::Pending => "pending",
            JobStatus::Running => "running",
            JobStatus::Failed => "failed",
        }
        .to_string(),
        attempts: entity.attempts,
        max_attempts: entity.max_attempts,
        run_at: entity.run_at,
        last_error: entity.last_error,
        updated_at: entity.updated_at,
    }
}
