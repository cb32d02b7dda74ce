//! Positional scarcity from the ownership of available players.
//!
//! A position whose available players are still widely owned elsewhere is
//! thin: the useful options are gone and what is left is contested.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::core::json::round1;
use crate::yahoo::BasicPlayer;

/// Bucket for players Yahoo sent without a position.
pub const UNKNOWN_POSITION: &str = "Unknown";

/// Scores are on a 0-10 scale.
pub const MAX_SCARCITY: f64 = 10.0;

/// Scarcity analysis for a single position.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PositionScarcity {
    /// `min(avg_ownership / 10, 10)`, one decimal.
    pub scarcity_score: f64,
    pub avg_ownership: f64,
    pub available_count: usize,
}

/// Scarcity per position string, over the players in one response.
pub fn position_scarcity(players: &[BasicPlayer]) -> BTreeMap<String, PositionScarcity> {
    let mut totals: BTreeMap<String, (usize, f64)> = BTreeMap::new();
    for player in players {
        let position = player
            .position
            .clone()
            .unwrap_or_else(|| UNKNOWN_POSITION.to_string());
        let entry = totals.entry(position).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += player.owned_pct;
    }

    totals
        .into_iter()
        .map(|(position, (count, owned_sum))| {
            let avg_owned = if count > 0 {
                owned_sum / count as f64
            } else {
                0.0
            };
            let scarcity = PositionScarcity {
                scarcity_score: round1((avg_owned / 10.0).min(MAX_SCARCITY)),
                avg_ownership: round1(avg_owned),
                available_count: count,
            };
            (position, scarcity)
        })
        .collect()
}

/// Analysis suffix for a scarce position, if any.
pub fn scarcity_note(position: &str, scarcity_score: f64) -> Option<String> {
    if scarcity_score > 7.0 {
        Some(format!(" HIGH SCARCITY at {}!", position))
    } else if scarcity_score > 4.0 {
        Some(format!(" Moderate scarcity at {}.", position))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(name: &str, position: Option<&str>, owned_pct: f64) -> BasicPlayer {
        BasicPlayer {
            name: name.to_string(),
            position: position.map(str::to_string),
            owned_pct,
            ..Default::default()
        }
    }

    #[test]
    fn test_position_scarcity_averages_by_position() {
        let table = position_scarcity(&[
            owned("a", Some("WR"), 10.0),
            owned("b", Some("WR"), 20.0),
            owned("c", Some("TE"), 75.0),
            owned("d", None, 3.0),
        ]);

        let wr = table["WR"];
        assert_eq!(wr.available_count, 2);
        assert_eq!(wr.avg_ownership, 15.0);
        assert_eq!(wr.scarcity_score, 1.5);

        assert_eq!(table["TE"].scarcity_score, 7.5);
        assert_eq!(table[UNKNOWN_POSITION].available_count, 1);
    }

    #[test]
    fn test_position_scarcity_caps_at_ten() {
        let table = position_scarcity(&[owned("a", Some("QB"), 100.0)]);
        assert_eq!(table["QB"].scarcity_score, MAX_SCARCITY);
    }

    #[test]
    fn test_position_scarcity_empty() {
        assert!(position_scarcity(&[]).is_empty());
    }

    #[test]
    fn test_scarcity_note_thresholds() {
        assert_eq!(scarcity_note("TE", 7.5).as_deref(), Some(" HIGH SCARCITY at TE!"));
        assert_eq!(scarcity_note("TE", 7.0).as_deref(), Some(" Moderate scarcity at TE."));
        assert_eq!(scarcity_note("TE", 4.0), None);
    }
}
