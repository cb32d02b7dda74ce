//! In-memory providers for unit tests.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::{
    error::FflError,
    sleeper::{NflState, PlayerDirectory, SecondaryProvider, SleeperPlayer, TrendingPlayer},
    yahoo::PrimaryProvider,
    Result, Season, Week,
};

/// Primary provider answering from canned payloads.
///
/// A resource is answered by the first registered fragment it contains.
#[derive(Default)]
pub struct FakePrimary {
    responses: Vec<(String, Value)>,
    calls: Mutex<Vec<String>>,
}

impl FakePrimary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(mut self, fragment: &str, payload: Value) -> Self {
        self.responses.push((fragment.to_string(), payload));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl PrimaryProvider for FakePrimary {
    async fn api_call(&self, resource: &str) -> Result<Value> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(resource.to_string());
        }
        self.responses
            .iter()
            .find(|(fragment, _)| resource.contains(fragment.as_str()))
            .map(|(_, payload)| payload.clone())
            .ok_or(FflError::NoData)
    }
}

/// Secondary provider backed by fixed tables.
pub struct FakeSecondary {
    pub state: Option<NflState>,
    pub players: Vec<SleeperPlayer>,
    pub projections: HashMap<u16, Value>,
    pub stats: HashMap<u16, Value>,
    pub trending: Option<Vec<TrendingPlayer>>,
    pub failing_stat_weeks: HashSet<u16>,
    pub failing_projection_weeks: HashSet<u16>,
}

impl Default for FakeSecondary {
    fn default() -> Self {
        Self {
            state: Some(nfl_state(2025, 6)),
            players: Vec::new(),
            projections: HashMap::new(),
            stats: HashMap::new(),
            trending: Some(Vec::new()),
            failing_stat_weeks: HashSet::new(),
            failing_projection_weeks: HashSet::new(),
        }
    }
}

#[async_trait]
impl SecondaryProvider for FakeSecondary {
    async fn nfl_state(&self) -> Result<NflState> {
        self.state.clone().ok_or(FflError::NoData)
    }

    async fn player_directory(&self) -> Result<Arc<PlayerDirectory>> {
        Ok(Arc::new(PlayerDirectory::new(self.players.clone())))
    }

    async fn trending_adds(&self, limit: usize) -> Result<Vec<TrendingPlayer>> {
        let trending = self.trending.clone().ok_or(FflError::NoData)?;
        Ok(trending.into_iter().take(limit).collect())
    }

    async fn weekly_stats(&self, _season: Season, week: Week) -> Result<Value> {
        if self.failing_stat_weeks.contains(&week.as_u16()) {
            return Err(FflError::NoData);
        }
        Ok(self.stats.get(&week.as_u16()).cloned().unwrap_or_else(|| json!({})))
    }

    async fn weekly_projections(&self, _season: Season, week: Week) -> Result<Value> {
        if self.failing_projection_weeks.contains(&week.as_u16()) {
            return Err(FflError::NoData);
        }
        Ok(self
            .projections
            .get(&week.as_u16())
            .cloned()
            .unwrap_or_else(|| json!({})))
    }
}

pub fn nfl_state(season: u16, week: u32) -> NflState {
    NflState {
        week: Some(week),
        season: Some(season.to_string()),
        season_type: Some("regular".to_string()),
    }
}

pub fn sleeper_player(id: &str, name: &str, position: &str, team: &str) -> SleeperPlayer {
    SleeperPlayer {
        player_id: id.to_string(),
        full_name: Some(name.to_string()),
        position: Some(position.to_string()),
        team: Some(team.to_string()),
        ..Default::default()
    }
}

pub fn trending_player(id: &str, name: &str, position: &str, count: u32) -> TrendingPlayer {
    TrendingPlayer {
        player_id: id.to_string(),
        name: name.to_string(),
        position: Some(position.to_string()),
        team: None,
        count,
    }
}

/// One Yahoo player entry in the `players` collection shape.
pub fn yahoo_player_entry(key: &str, name: &str, team: &str, position: &str, owned: f64) -> Value {
    json!({"player": [[
        {"player_key": key},
        {"name": {"full": name}},
        {"editorial_team_abbr": team},
        {"display_position": position}
    ], {"percent_owned": {"value": owned, "delta": "0"}}]})
}

/// A `fantasy_content.league[..].players` payload from player entries.
pub fn yahoo_players_payload(entries: Vec<Value>) -> Value {
    let mut players = serde_json::Map::new();
    let count = entries.len();
    for (i, entry) in entries.into_iter().enumerate() {
        players.insert(i.to_string(), entry);
    }
    players.insert("count".to_string(), json!(count));
    json!({"fantasy_content": {"league": [
        {"league_key": "nfl.l.777"},
        {"players": players}
    ]}})
}
