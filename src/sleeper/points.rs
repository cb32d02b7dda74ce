//! Point extraction from Sleeper stats and projection rows.

use serde_json::Value;

use crate::core::json::{first_float, safe_float};

const PROJECTION_KEYS: [&str; 4] = ["pts_ppr", "pts", "pts_std", "pts_half_ppr"];

/// Row for one player in a per-week payload keyed by Sleeper id.
///
/// Sleeper returns either an object keyed by id or, on newer endpoints, an
/// array of rows carrying `player_id`.
pub fn player_row<'a>(payload: &'a Value, sleeper_id: &str) -> Option<&'a Value> {
    match payload {
        Value::Object(map) => map.get(sleeper_id).filter(|v| v.is_object()),
        Value::Array(rows) => rows.iter().find(|row| {
            row.get("player_id")
                .and_then(Value::as_str)
                .is_some_and(|id| id == sleeper_id)
        }),
        _ => None,
    }
    .map(|row| row.get("stats").filter(|s| s.is_object()).unwrap_or(row))
}

/// PPR points, or standard points when PPR is missing or zero.
///
/// A zero PPR value is kept only when there are no standard points.
fn ppr_or_standard(row: &Value) -> Option<f64> {
    let ppr = row.get("pts_ppr").and_then(safe_float);
    match ppr {
        Some(v) if v != 0.0 => Some(v),
        _ => row.get("pts").and_then(safe_float).or(ppr),
    }
}

/// Actual PPR points, falling back to standard points.
pub fn earned_points(stats: &Value) -> Option<f64> {
    ppr_or_standard(stats)
}

/// Projected points from a projection row.
///
/// Tries the scoring keys in PPR-first order, then sums a `projected_stats`
/// list, then reads a `projected_stats` object.
pub fn projection_points(projection: &Value) -> Option<f64> {
    if !projection.is_object() {
        return None;
    }
    if let Some(v) = first_float(projection, &PROJECTION_KEYS) {
        return Some(v);
    }

    match projection.get("projected_stats") {
        Some(Value::Array(rows)) => {
            let values: Vec<f64> = rows
                .iter()
                .filter(|r| r.is_object())
                .filter_map(ppr_or_standard)
                .collect();
            (!values.is_empty()).then(|| values.iter().sum())
        }
        Some(block @ Value::Object(_)) => ppr_or_standard(block),
        _ => None,
    }
}

/// Opponent abbreviation if the projection row carries one.
pub fn opponent(row: &Value) -> Option<String> {
    ["opponent", "opp"]
        .iter()
        .find_map(|k| row.get(*k).and_then(Value::as_str))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_player_row_object_payload() {
        let payload = json!({"4046": {"pts_ppr": 21.3}, "bad": 3});
        assert_eq!(player_row(&payload, "4046").unwrap()["pts_ppr"], 21.3);
        assert!(player_row(&payload, "bad").is_none());
        assert!(player_row(&payload, "missing").is_none());
    }

    #[test]
    fn test_player_row_array_payload_unwraps_stats() {
        let payload = json!([
            {"player_id": "1", "stats": {"pts_ppr": 4.0}},
            {"player_id": "2", "stats": {"pts_ppr": 9.5}, "opponent": "DAL"}
        ]);
        assert_eq!(player_row(&payload, "2").unwrap()["pts_ppr"], 9.5);
    }

    #[test]
    fn test_earned_points_fallback() {
        assert_eq!(earned_points(&json!({"pts_ppr": 17.2, "pts": 12.2})), Some(17.2));
        assert_eq!(earned_points(&json!({"pts": "12.2"})), Some(12.2));
        assert_eq!(earned_points(&json!({"rec": 4})), None);
    }

    #[test]
    fn test_zero_ppr_falls_back_to_standard() {
        assert_eq!(earned_points(&json!({"pts_ppr": 0.0, "pts": 5.0})), Some(5.0));
        assert_eq!(earned_points(&json!({"pts_ppr": 0.0})), Some(0.0));

        let list = json!({"projected_stats": [{"pts_ppr": 0, "pts": 2.5}, {"pts_ppr": 1.0}]});
        assert_eq!(projection_points(&list), Some(3.5));
    }

    #[test]
    fn test_projection_points_key_order() {
        assert_eq!(
            projection_points(&json!({"pts_half_ppr": 10.0, "pts_std": 9.0})),
            Some(9.0)
        );
        assert_eq!(projection_points(&json!({"pts_half_ppr": 10.0})), Some(10.0));
    }

    #[test]
    fn test_projection_points_from_projected_stats() {
        let list = json!({"projected_stats": [{"pts_ppr": 3.5}, {"pts": 2.0}, "junk", {"rec": 1}]});
        assert_eq!(projection_points(&list), Some(5.5));

        let obj = json!({"projected_stats": {"pts": 7.25}});
        assert_eq!(projection_points(&obj), Some(7.25));

        let empty = json!({"projected_stats": [{"rec": 1}]});
        assert_eq!(projection_points(&empty), None);
    }

    #[test]
    fn test_projection_points_non_object() {
        assert_eq!(projection_points(&json!(12.0)), None);
    }

    #[test]
    fn test_opponent() {
        assert_eq!(opponent(&json!({"opponent": "KC"})), Some("KC".to_string()));
        assert_eq!(opponent(&json!({"opp": "NYJ"})), Some("NYJ".to_string()));
        assert_eq!(opponent(&json!({})), None);
    }
}
