//! SeaORM entity models for every table owned by warboard.
//!
//! Parents are referenced by id only. A tenant owns its wars through
//! `war.tenant_id`, a war owns participants, attacks and calls through their
//! `war_id`; nothing here holds a live collection of children.

pub mod prelude;

pub mod app_user;
pub mod attack;
pub mod ingestion_job;
pub mod membership;
pub mod player;
pub mod tenant;
pub mod war;
pub mod war_call;
pub mod war_participant;
