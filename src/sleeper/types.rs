use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::core::json::{parse_int, string_of};
use crate::{Season, Week};

fn de_lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(string_of))
}

fn de_lenient_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(parse_int)
        .and_then(|v| u32::try_from(v).ok()))
}

/// One entry of Sleeper's `/players/nfl` directory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SleeperPlayer {
    pub player_id: String,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub full_name: Option<String>,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub position: Option<String>,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub team: Option<String>,
    /// Sleeper's popularity rank; lower is more relevant.
    #[serde(default, deserialize_with = "de_lenient_u32")]
    pub search_rank: Option<u32>,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub injury_status: Option<String>,
}

impl SleeperPlayer {
    /// Display name; team defenses only carry first/last ("Buffalo" "Bills").
    pub fn display_name(&self) -> String {
        if let Some(full) = self.full_name.as_deref().filter(|n| !n.is_empty()) {
            return full.to_string();
        }
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            (Some(first), None) => first.to_string(),
            (None, Some(last)) => last.to_string(),
            (None, None) => self.player_id.clone(),
        }
    }
}

/// Response of `/state/nfl`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NflState {
    #[serde(default, deserialize_with = "de_lenient_u32")]
    pub week: Option<u32>,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub season: Option<String>,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub season_type: Option<String>,
}

impl NflState {
    pub fn season(&self) -> Season {
        self.season
            .as_deref()
            .and_then(|s| s.trim().parse::<u16>().ok())
            .map(Season::new)
            .unwrap_or_default()
    }

    /// Current week; preseason and offseason report week 0, treated as 1.
    pub fn week(&self) -> Week {
        let week = self.week.unwrap_or(1).clamp(1, u32::from(u16::MAX));
        Week::new(week as u16)
    }
}

/// A player Sleeper users are adding, resolved against the directory.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendingPlayer {
    pub player_id: String,
    pub name: String,
    pub position: Option<String>,
    pub team: Option<String>,
    pub count: u32,
}

/// How a Yahoo player was matched to a Sleeper id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMethod {
    /// Same normalized name, position and team
    Exact,
    /// Same normalized name and position
    NamePosition,
    /// Same normalized name, most relevant candidate
    Name,
    /// Team defense matched by team code
    TeamDefense,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerMatch {
    pub sleeper_id: String,
    pub method: MatchMethod,
    pub player: SleeperPlayer,
}

/// Tier, recommendation and confidence derived from Sleeper projections.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpertAdvice {
    pub tier: String,
    pub recommendation: String,
    pub confidence: f64,
    pub advice: String,
}

impl ExpertAdvice {
    /// Values used when advice cannot be fetched for a player.
    pub fn unavailable() -> Self {
        Self {
            tier: "Depth".to_string(),
            recommendation: "Monitor".to_string(),
            confidence: 50.0,
            advice: "Expert analysis unavailable".to_string(),
        }
    }
}
