//! Clan and player payloads in the upstream JSON shape.

use serde_json::{json, Value};

/// `GET /clans/{tag}` response.
pub fn clan(tag: &str, name: &str) -> Value {
    json!({
        "tag": tag,
        "name": name,
        "clanLevel": 12,
        "members": 42,
        "description": "Test clan"
    })
}

/// `GET /players/{tag}` response.
pub fn player(tag: &str, name: &str) -> Value {
    json!({
        "tag": tag,
        "name": name,
        "townHallLevel": 15,
        "expLevel": 210,
        "trophies": 5100,
        "clan": { "tag": "#ABC", "name": "Home Clan" }
    })
}
