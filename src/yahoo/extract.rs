//! Field extraction from Yahoo Fantasy JSON payloads.
//!
//! Yahoo's JSON rendering of its XML API nests player data as arrays of
//! single-key objects mixed with plain objects, keyed by stringified indexes.
//! Nothing here fails: a missing or oddly shaped key is simply absent.

use serde_json::{Map, Value};

use crate::core::json::{safe_float, string_of};
use crate::yahoo::types::{BasicPlayer, LeagueRef, YahooPlayerInfo};


/// Collect every object reachable through nested arrays, in document order.
pub fn iter_payload_dicts<'a>(container: &'a Value, out: &mut Vec<&'a Map<String, Value>>) {
    match container {
        Value::Object(map) => out.push(map),
        Value::Array(items) => {
            for item in items {
                iter_payload_dicts(item, out);
            }
        }
        _ => {}
    }
}

/// The `player` arrays of every players collection under `fantasy_content.league`.
///
/// Entries are returned in Yahoo's index order ("0", "1", ... "10"), not the
/// lexical order of the JSON map.
fn player_arrays(payload: &Value) -> Vec<&Value> {
    let Some(league) = payload
        .get("fantasy_content")
        .and_then(|c| c.get("league"))
        .and_then(Value::as_array)
    else {
        return Vec::new();
    };

    let mut arrays = Vec::new();
    for item in league {
        let Some(players) = item.get("players").and_then(Value::as_object) else {
            continue;
        };

        let mut indexed: Vec<(usize, &Value)> = players
            .iter()
            .filter(|(key, _)| key.as_str() != "count")
            .filter_map(|(key, entry)| {
                let idx = key.parse::<usize>().unwrap_or(usize::MAX);
                let player = entry.get("player").filter(|p| p.is_array())?;
                Some((idx, player))
            })
            .collect();
        indexed.sort_by_key(|(idx, _)| *idx);
        arrays.extend(indexed.into_iter().map(|(_, player)| player));
    }
    arrays
}

/// Read `value`/`delta` out of a `percent_owned` block of any shape.
fn percent_owned(raw: &Value) -> (Option<f64>, Option<f64>) {
    if let Some(v) = safe_float(raw) {
        return (Some(v), None);
    }
    let mut dicts = Vec::new();
    iter_payload_dicts(raw, &mut dicts);

    let value = dicts.iter().find_map(|d| d.get("value").and_then(safe_float));
    let delta = dicts.iter().find_map(|d| d.get("delta").and_then(safe_float));
    (value, delta)
}

fn points_total(raw: &Value) -> Option<f64> {
    let mut dicts = Vec::new();
    iter_payload_dicts(raw, &mut dicts);
    dicts.iter().find_map(|d| d.get("total").and_then(safe_float))
}

fn basic_player_from(player_array: &Value) -> Option<BasicPlayer> {
    let mut dicts = Vec::new();
    iter_payload_dicts(player_array, &mut dicts);

    let mut player = BasicPlayer::default();
    let mut seen_any = false;
    let mut projected = None;
    let mut actual = None;

    for payload in dicts {
        if let Some(full) = payload
            .get("name")
            .and_then(Value::as_object)
            .and_then(|n| n.get("full"))
            .and_then(Value::as_str)
        {
            player.name = full.to_string();
            seen_any = true;
        }
        if let Some(key) = payload.get("player_key").and_then(string_of) {
            player.player_key = Some(key);
        }
        if let Some(team) = payload.get("editorial_team_abbr").and_then(string_of) {
            player.team = Some(team);
            seen_any = true;
        }
        if let Some(pos) = payload.get("display_position").and_then(string_of) {
            player.position = Some(pos);
            seen_any = true;
        }
        if let Some(pct) = payload
            .get("ownership")
            .and_then(Value::as_object)
            .and_then(|o| o.get("ownership_percentage"))
            .and_then(safe_float)
        {
            player.owned_pct = pct;
            seen_any = true;
        }
        if let Some(raw) = payload.get("percent_owned") {
            let (value, delta) = percent_owned(raw);
            if let Some(v) = value {
                player.owned_pct = v;
                seen_any = true;
            }
            if delta.is_some() {
                player.weekly_change = delta;
            }
        }
        if let Some(status) = payload.get("status").and_then(string_of) {
            player.injury_status = Some(status);
            seen_any = true;
        }
        if let Some(bye) = payload.get("bye_weeks") {
            player.bye = Some(
                bye.get("week")
                    .and_then(string_of)
                    .unwrap_or_else(|| "N/A".to_string()),
            );
            seen_any = true;
        }
        if let Some(total) = payload.get("player_projected_points").and_then(points_total) {
            projected = Some(total);
        }
        if let Some(total) = payload.get("player_points").and_then(points_total) {
            actual = Some(total);
        }
    }

    player.projected_points = projected.or(actual);

    // Unnamed records cannot be joined or displayed, so they are dropped.
    (seen_any && !player.name.is_empty()).then_some(player)
}

/// Flatten a league players collection into [`BasicPlayer`] records.
pub fn extract_basic_players(payload: &Value) -> Vec<BasicPlayer> {
    player_arrays(payload)
        .into_iter()
        .filter_map(basic_player_from)
        .collect()
}

/// Identity of the first named player in a `players;player_keys=` response.
pub fn extract_player_info(payload: &Value, requested_key: &str) -> Option<YahooPlayerInfo> {
    for player_array in player_arrays(payload) {
        let mut dicts = Vec::new();
        iter_payload_dicts(player_array, &mut dicts);

        let mut info = YahooPlayerInfo {
            player_key: requested_key.to_string(),
            yahoo_player_id: None,
            name: String::new(),
            team: None,
            position: None,
        };
        for item in dicts {
            if let Some(key) = item.get("player_key").and_then(string_of) {
                info.player_key = key;
            }
            if let Some(id) = item.get("player_id").and_then(string_of) {
                info.yahoo_player_id = Some(id);
            }
            if let Some(full) = item
                .get("name")
                .and_then(|n| n.get("full"))
                .and_then(Value::as_str)
            {
                info.name = full.to_string();
            }
            if let Some(team) = item.get("editorial_team_abbr").and_then(string_of) {
                info.team = Some(team);
            }
            if let Some(pos) = item.get("display_position").and_then(string_of) {
                info.position = Some(pos);
            }
        }
        if !info.name.is_empty() {
            return Some(info);
        }
    }
    None
}

/// Every object anywhere in the payload carrying both a league key and id.
pub fn extract_leagues(payload: &Value) -> Vec<LeagueRef> {
    fn walk(value: &Value, out: &mut Vec<LeagueRef>) {
        match value {
            Value::Object(map) => {
                let key = map.get("league_key").and_then(string_of);
                let id = map.get("league_id").and_then(string_of);
                if let (Some(league_key), Some(league_id)) = (key, id) {
                    out.push(LeagueRef {
                        league_key,
                        league_id,
                        name: map.get("name").and_then(string_of),
                    });
                }
                for child in map.values() {
                    walk(child, out);
                }
            }
            Value::Array(items) => {
                for item in items {
                    walk(item, out);
                }
            }
            _ => {}
        }
    }

    let mut leagues = Vec::new();
    walk(payload, &mut leagues);
    leagues
}
