//! Clan war ingestion pipeline.
//!
//! The scheduler feeds the durable [`queue::JobQueue`]; a [`pool::WorkerPool`] drains
//! it, running [`worker::IngestionWorker`] for one clan at a time per job. Delivery is
//! at-least-once, so every step of a run is written to converge when repeated.

pub mod backoff;
pub mod pool;
pub mod queue;
pub mod worker;
