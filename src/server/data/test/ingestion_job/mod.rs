use crate::server::data::ingestion_job::IngestionJobRepository;
use chrono::{Duration, Utc};
use entity::ingestion_job::JobStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod enqueue;
mod transitions;
mod try_claim;
