//! Name-based lookup over the Sleeper player directory.

use std::collections::HashMap;

use crate::sleeper::types::{MatchMethod, PlayerMatch, SleeperPlayer};

const NAME_SUFFIXES: [&str; 5] = ["jr", "sr", "ii", "iii", "iv"];

/// Lowercase, strip punctuation and generational suffixes.
///
/// "D.J. Moore" and "DJ Moore" both become "dj moore"; "Marvin Harrison Jr."
/// becomes "marvin harrison".
pub fn normalize_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter_map(|c| match c {
            '.' | '\'' | '\u{2019}' | ',' => None,
            '-' => Some(' '),
            c => Some(c.to_ascii_lowercase()),
        })
        .collect();

    let mut parts: Vec<&str> = cleaned.split_whitespace().collect();
    while parts.len() > 1 && parts.last().is_some_and(|p| NAME_SUFFIXES.contains(p)) {
        parts.pop();
    }
    parts.join(" ")
}

fn same_code(a: Option<&str>, b: Option<&str>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.trim().eq_ignore_ascii_case(b.trim()),
        _ => false,
    }
}

fn is_defense(position: Option<&str>) -> bool {
    position.is_some_and(|p| {
        let p = p.trim().to_ascii_uppercase();
        p == "DEF" || p == "D/ST" || p == "DST"
    })
}

/// Sleeper players indexed by normalized name and by Sleeper id.
#[derive(Debug, Clone, Default)]
pub struct PlayerDirectory {
    players: Vec<SleeperPlayer>,
    by_name: HashMap<String, Vec<usize>>,
    by_id: HashMap<String, usize>,
}

impl PlayerDirectory {
    pub fn new(players: Vec<SleeperPlayer>) -> Self {
        let mut by_name: HashMap<String, Vec<usize>> = HashMap::new();
        let mut by_id: HashMap<String, usize> = HashMap::with_capacity(players.len());
        for (idx, player) in players.iter().enumerate() {
            by_id.entry(player.player_id.clone()).or_insert(idx);
            by_name
                .entry(normalize_name(&player.display_name()))
                .or_default()
                .push(idx);
        }
        // Most relevant first so ties resolve to the fantasy-relevant player
        for indices in by_name.values_mut() {
            indices.sort_by_key(|&i| players[i].search_rank.unwrap_or(u32::MAX));
        }
        Self {
            players,
            by_name,
            by_id,
        }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn players(&self) -> &[SleeperPlayer] {
        &self.players
    }

    pub fn get(&self, sleeper_id: &str) -> Option<&SleeperPlayer> {
        self.by_id.get(sleeper_id).map(|&i| &self.players[i])
    }

    /// Match a Yahoo player to a Sleeper id.
    ///
    /// Candidates share the normalized name; position and team narrow the
    /// choice. Team defenses are matched on team code alone because the two
    /// providers name them differently.
    pub fn find(
        &self,
        name: &str,
        position: Option<&str>,
        team: Option<&str>,
    ) -> Option<PlayerMatch> {
        if is_defense(position) {
            if let Some(found) = self
                .players
                .iter()
                .find(|p| is_defense(p.position.as_deref()) && same_code(p.team.as_deref(), team))
            {
                return Some(self.matched(found, MatchMethod::TeamDefense));
            }
        }

        let candidates: Vec<&SleeperPlayer> = self
            .by_name
            .get(&normalize_name(name))?
            .iter()
            .map(|&i| &self.players[i])
            .collect();

        let position_matches = |p: &&SleeperPlayer| same_code(p.position.as_deref(), position);

        if let Some(found) = candidates
            .iter()
            .copied()
            .find(|p| position_matches(p) && same_code(p.team.as_deref(), team))
        {
            return Some(self.matched(found, MatchMethod::Exact));
        }
        if let Some(found) = candidates.iter().copied().find(position_matches) {
            return Some(self.matched(found, MatchMethod::NamePosition));
        }
        candidates
            .first()
            .map(|found| self.matched(found, MatchMethod::Name))
    }

    fn matched(&self, player: &SleeperPlayer, method: MatchMethod) -> PlayerMatch {
        PlayerMatch {
            sleeper_id: player.player_id.clone(),
            method,
            player: player.clone(),
        }
    }
}
