//! Cron-driven background jobs.

pub mod clan_ingestion;
