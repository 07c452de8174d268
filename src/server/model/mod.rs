//! Domain models and operation-specific parameter types.
//!
//! Repositories return these instead of raw entity models where a conversion or
//! aggregation is involved; each model knows how to turn itself into its DTO.

pub mod auth;
pub mod ingestion;
pub mod player;
pub mod tenant;
pub mod war;
pub mod war_call;
