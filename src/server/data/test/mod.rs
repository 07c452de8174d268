use crate::server::{coc::payload::CurrentWarPayload, model::war::WarSnapshot};

mod attack;
mod ingestion_job;
mod membership;
mod tenant;
mod war;
mod war_call;

/// Builds a merge-ready snapshot from a fixture payload for clan `#ABC`.
fn snapshot(value: serde_json::Value) -> WarSnapshot {
    let payload = CurrentWarPayload::from_value(value).unwrap();
    WarSnapshot::from_payload("#ABC", &payload).unwrap()
}
