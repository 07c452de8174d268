//! Data transfer objects exchanged over the HTTP API.

pub mod api;
pub mod ingestion;
pub mod player;
pub mod tenant;
pub mod war;
pub mod war_call;
