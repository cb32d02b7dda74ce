//! Argument helpers and response pieces shared by the tool handlers.
//!
//! Tool arguments arrive as a loose JSON object. Readers here never fail:
//! a missing or malformed value falls back to the handler's default.

use serde_json::{Map, Value};

use crate::{
    core::json::parse_int,
    enrich::EnrichedPlayer,
    error::{FflError, ToolError},
    models::{EnhancedPlayerView, Includes, WeekLabel},
    yahoo::BasicPlayer,
    LeagueKey, Position, Week,
};

pub const DEFAULT_POSITION: &str = "all";
pub const YAHOO_SOURCE: &str = "Yahoo";
pub const SLEEPER_SOURCE: &str = "Sleeper";

/// Trimmed, non-empty string argument.
pub fn arg_str(args: &Map<String, Value>, name: &str) -> Option<String> {
    match args.get(name)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Boolean argument; accepts JSON booleans and "true"/"false"-like strings.
pub fn arg_bool(args: &Map<String, Value>, name: &str, default: bool) -> bool {
    match args.get(name) {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" => true,
            "false" | "0" | "no" => false,
            _ => default,
        },
        Some(Value::Number(n)) => n.as_i64().map(|v| v != 0).unwrap_or(default),
        _ => default,
    }
}

pub fn arg_int(args: &Map<String, Value>, name: &str) -> Option<i64> {
    args.get(name).and_then(parse_int)
}

/// Positive count, or `default` when missing, non-numeric or below one.
pub fn arg_count(args: &Map<String, Value>, name: &str, default: usize) -> usize {
    match arg_int(args, name) {
        Some(n) if n >= 1 => n as usize,
        _ => default,
    }
}

/// Week argument; anything below one means "current".
pub fn arg_week(args: &Map<String, Value>, name: &str) -> Option<Week> {
    arg_int(args, name)
        .filter(|w| (1..=i64::from(u16::MAX)).contains(w))
        .map(|w| Week::new(w as u16))
}

/// The league key argument, checked before any provider call.
pub fn require_league_key(args: &Map<String, Value>) -> Result<LeagueKey, ToolError> {
    arg_str(args, "league_key")
        .map(|raw| LeagueKey::from_raw(&raw))
        .ok_or_else(|| {
            FflError::MissingArgument {
                name: "league_key".to_string(),
            }
            .into()
        })
}

/// Position label echoed in the response, and the Yahoo filter it maps to.
///
/// Known positions use their Yahoo code; anything else is passed through.
pub fn position_filter(args: &Map<String, Value>) -> (String, Option<String>) {
    let label = arg_str(args, "position").unwrap_or_else(|| DEFAULT_POSITION.to_string());
    if label.eq_ignore_ascii_case(DEFAULT_POSITION) {
        return (label, None);
    }
    let filter = match label.parse::<Position>() {
        Ok(position) => position.yahoo_code().to_string(),
        Err(_) => label.to_uppercase(),
    };
    (label, Some(filter))
}

/// Which optional blocks the caller asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnhancementFlags {
    pub include_analysis: bool,
    pub include_projections: bool,
    pub include_external_data: bool,
}

impl EnhancementFlags {
    pub fn from_args(args: &Map<String, Value>) -> Self {
        Self {
            include_analysis: arg_bool(args, "include_analysis", false),
            include_projections: arg_bool(args, "include_projections", true),
            include_external_data: arg_bool(args, "include_external_data", true),
        }
    }

    pub fn needs_enhancement(&self) -> bool {
        self.include_analysis || self.include_projections || self.include_external_data
    }

    pub fn includes(&self, expert_advice: Option<bool>) -> Includes {
        Includes {
            projections: self.include_projections,
            external_data: self.include_external_data,
            analysis: self.include_analysis,
            expert_advice,
        }
    }

    /// Sleeper is listed only when external data was requested.
    pub fn data_sources(&self) -> Vec<&'static str> {
        if self.include_external_data {
            vec![YAHOO_SOURCE, SLEEPER_SOURCE]
        } else {
            vec![YAHOO_SOURCE]
        }
    }
}

pub fn week_label(week: Option<Week>) -> WeekLabel {
    week.map(|w| WeekLabel::Number(w.as_u16()))
        .unwrap_or(WeekLabel::Current)
}

/// View fields common to both list tools.
///
/// Projection and external-data fields are only filled when their flag is
/// on; everything flag-gated stays `None` and is dropped from the JSON.
pub fn base_view(
    player: &EnrichedPlayer,
    basic: Option<&BasicPlayer>,
    flags: EnhancementFlags,
) -> EnhancedPlayerView {
    let mut view = EnhancedPlayerView {
        name: player.name.clone(),
        position: player.position.clone(),
        team: player.team.clone(),
        opponent: player.opponent.clone().unwrap_or_else(|| "N/A".to_string()),
        status: "Available".to_string(),
        sleeper_id: player.sleeper_id.clone(),
        sleeper_match_method: player.sleeper_match_method,
        consistency_score: player.consistency_score,
        player_tier: player.player_tier.clone(),
        risk_level: player.risk_level.clone(),
        owned_pct: basic.map(|b| b.owned_pct).unwrap_or(0.0),
        injury_status: player
            .injury_status
            .clone()
            .unwrap_or_else(|| "Healthy".to_string()),
        bye: basic
            .and_then(|b| b.bye.clone())
            .unwrap_or_else(|| "N/A".to_string()),
        ..Default::default()
    };

    if flags.include_projections {
        view.yahoo_projection = player.yahoo_projection;
        view.sleeper_projection = player.sleeper_projection;
        view.floor_projection = player.floor_projection;
        view.ceiling_projection = player.ceiling_projection;
    }
    if flags.include_external_data {
        view.matchup_score = player.matchup_score;
        view.matchup_description = player.matchup_description.clone();
        view.trending_score = player.trending_score;
    }
    view
}

/// Sort descending by `key`, keeping provider order between equal values.
pub fn sort_desc_by<F>(views: &mut [EnhancedPlayerView], key: F)
where
    F: Fn(&EnhancedPlayerView) -> f64,
{
    views.sort_by(|a, b| {
        key(b)
            .partial_cmp(&key(a))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

/// Projection sum used when sorting without analysis.
pub fn view_projection(view: &EnhancedPlayerView) -> f64 {
    view.yahoo_projection.unwrap_or(0.0) + view.sleeper_projection.unwrap_or(0.0)
}
