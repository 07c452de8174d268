//! Current-war payloads in the upstream JSON shape.

use serde_json::{json, Value};

/// War tag used by the minimal payload.
pub const MINIMAL_WAR_TAG: &str = "#ABC-#XYZ-1690000000000";

/// Smallest payload the worker must accept: one member with one attack.
///
/// Carries no start time, opponent, or member names.
pub fn minimal() -> Value {
    json!({
        "state": "inWar",
        "warTag": MINIMAL_WAR_TAG,
        "clan": {
            "members": [
                {
                    "tag": "#P1",
                    "attacks": [
                        { "attackerTag": "#P1", "defenderTag": "#P2", "order": 1, "stars": 2 }
                    ]
                }
            ]
        }
    })
}

/// Upstream answer for a clan that is not currently at war.
pub fn not_in_war() -> Value {
    json!({ "state": "notInWar" })
}

/// A realistic in-war payload without a `warTag`.
///
/// Two members, three attacks, and one defense recorded against `#P1`.
/// `opponentAttacks` is given as a count for one member and as an array for the other.
pub fn in_war(clan_tag: &str) -> Value {
    json!({
        "state": "inWar",
        "teamSize": 2,
        "preparationStartTime": "20230722T040000.000Z",
        "startTime": "20230723T040000.000Z",
        "endTime": "20230724T040000.000Z",
        "clan": {
            "tag": clan_tag,
            "name": "Home Clan",
            "stars": 5,
            "destructionPercentage": 87.5,
            "members": [
                {
                    "tag": "#P1",
                    "name": "Alpha",
                    "townhallLevel": 15,
                    "mapPosition": 1,
                    "opponentAttacks": 1,
                    "bestOpponentAttack": {
                        "attackerTag": "#O2",
                        "defenderTag": "#P1",
                        "stars": 1,
                        "destructionPercentage": 45,
                        "order": 2,
                        "duration": 150
                    },
                    "attacks": [
                        {
                            "attackerTag": "#P1",
                            "defenderTag": "#O1",
                            "stars": 3,
                            "destructionPercentage": 100,
                            "order": 1,
                            "duration": 120
                        },
                        {
                            "attackerTag": "#P1",
                            "defenderTag": "#O2",
                            "stars": 2,
                            "destructionPercentage": 75,
                            "order": 3,
                            "duration": 170
                        }
                    ]
                },
                {
                    "tag": "#P2",
                    "name": "Bravo",
                    "townhallLevel": 14,
                    "mapPosition": 2,
                    "opponentAttacks": [],
                    "attacks": [
                        {
                            "attackerTag": "#P2",
                            "defenderTag": "#O2",
                            "stars": 0,
                            "destructionPercentage": 35.5,
                            "order": 4,
                            "duration": 180
                        }
                    ]
                }
            ]
        },
        "opponent": {
            "tag": "#OPP",
            "name": "Rival Clan",
            "stars": 1,
            "destructionPercentage": 45.0,
            "members": []
        }
    })
}

/// The same war after a later poll: one more attack and higher scores.
pub fn in_war_progressed(clan_tag: &str) -> Value {
    let mut payload = in_war(clan_tag);
    payload["clan"]["stars"] = json!(7);
    if let Some(attacks) = payload["clan"]["members"][1]["attacks"].as_array_mut() {
        attacks.push(json!({
            "attackerTag": "#P2",
            "defenderTag": "#O1",
            "stars": 2,
            "destructionPercentage": 80,
            "order": 5,
            "duration": 160
        }));
    }
    payload
}

/// Finished war carrying an upstream `warTag`.
pub fn war_ended(clan_tag: &str, war_tag: &str) -> Value {
    let mut payload = in_war(clan_tag);
    payload["state"] = json!("warEnded");
    payload["warTag"] = json!(war_tag);
    payload
}
