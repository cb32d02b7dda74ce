//! Output models used for JSON serialization of tool responses.

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

use crate::scoring::{PickupUrgency, PositionScarcity};
use crate::sleeper::types::MatchMethod;
use crate::yahoo::BasicPlayer;

pub const STATUS_SUCCESS: &str = "success";

/// Week reported in `analysis_context`: a number, or "current" when the
/// caller did not ask for one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekLabel {
    Number(u16),
    Current,
}

impl Serialize for WeekLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            WeekLabel::Number(w) => serializer.serialize_u16(*w),
            WeekLabel::Current => serializer.serialize_str("current"),
        }
    }
}

/// Which optional data blocks a response carries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Includes {
    pub projections: bool,
    pub external_data: bool,
    pub analysis: bool,
    /// Waiver responses only; tied to the analysis flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expert_advice: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Algorithm {
    pub waiver_priority_weights: BTreeMap<&'static str, &'static str>,
}

/// Metadata describing how an enhanced list was built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisContext {
    pub data_sources: Vec<&'static str>,
    pub includes: Includes,
    pub features: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<Algorithm>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_scarcity: Option<BTreeMap<String, PositionScarcity>>,
    pub week: WeekLabel,
    pub trending_count: usize,
}

/// One player in `enhanced_players`.
///
/// Flag-gated fields are left `None` and dropped from the JSON, so a
/// response without analysis has no `waiver_priority`, `pickup_urgency`
/// or `expert_*` keys at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EnhancedPlayerView {
    pub name: String,
    pub position: Option<String>,
    pub team: Option<String>,
    pub opponent: String,
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub yahoo_projection: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sleeper_projection: Option<f64>,
    pub sleeper_id: Option<String>,
    pub sleeper_match_method: Option<MatchMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor_projection: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ceiling_projection: Option<f64>,
    pub consistency_score: Option<f64>,
    pub player_tier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matchup_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matchup_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trending_score: Option<f64>,
    pub risk_level: Option<String>,
    pub owned_pct: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekly_change: Option<f64>,
    pub injury_status: String,
    pub bye: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bye_week: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_bye: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance_flags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enhancement_context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjusted_projection: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expert_tier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expert_recommendation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expert_confidence: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expert_advice: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub trending_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trending_position: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub waiver_priority: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_urgency: Option<PickupUrgency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_context: Option<PositionScarcity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free_agent_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<String>,
}

/// Response of `get-players` and `get-waiver-wire`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerListResponse {
    pub status: &'static str,
    pub league_key: String,
    pub position: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    pub total_players: usize,
    pub players: Vec<BasicPlayer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enhanced_players: Option<Vec<EnhancedPlayerView>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis_context: Option<AnalysisContext>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl PlayerListResponse {
    /// Basic (Yahoo-only) response; `total_players` follows `players`.
    pub fn basic(league_key: &str, position: &str, players: Vec<BasicPlayer>) -> Self {
        Self {
            status: STATUS_SUCCESS,
            league_key: league_key.to_string(),
            position: position.to_string(),
            sort: None,
            total_players: players.len(),
            players,
            enhanced_players: None,
            analysis_context: None,
            message: None,
            note: None,
            warnings: Vec::new(),
        }
    }
}

/// Points for a particular scoring week.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyPoints {
    pub week_number: u16,
    /// Actual fantasy points, `null` when Sleeper has none.
    pub earned_points: Option<f64>,
    pub sleeper_projected_points: Option<f64>,
}

/// Response of `get-player-weekly-points`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyPointsResponse {
    pub status: &'static str,
    pub league_key: String,
    pub league_id: String,
    pub player_name: String,
    pub player_key: String,
    pub yahoo_player_id: Option<String>,
    pub position: Option<String>,
    pub team: Option<String>,
    pub sleeper_id: String,
    pub season: u16,
    pub start_week: u16,
    pub end_week: u16,
    pub weeks: Vec<WeeklyPoints>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}
