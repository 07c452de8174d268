//! Database repository layer for all domain entities.
//!
//! Repositories use SeaORM entity models internally and hold a borrowed connection.
//! Conditional writes (upserts, insert-if-absent, guarded status transitions) live here
//! so the uniqueness constraints, not prior reads, decide the outcome under concurrency.

pub mod attack;
pub mod ingestion_job;
pub mod membership;
pub mod player;
pub mod tenant;
pub mod war;
pub mod war_call;
pub mod war_participant;

#[cfg(test)]
mod test;
