use serde::{Deserialize, Serialize};

/// Flat player record pulled out of a Yahoo players collection.
///
/// Every field except `name` may be missing from the provider payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BasicPlayer {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default)]
    pub owned_pct: f64,
    /// Ownership change since last week (percentage points).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekly_change: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub injury_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bye: Option<String>,
    /// Yahoo's own projected points, when the payload carries them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projected_points: Option<f64>,
}

impl BasicPlayer {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Bye week as a number, if Yahoo sent one.
    pub fn bye_week(&self) -> Option<u16> {
        self.bye.as_deref().and_then(|b| b.trim().parse().ok())
    }
}

/// Identity of a single player, used by the weekly-points flow.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YahooPlayerInfo {
    pub player_key: String,
    pub yahoo_player_id: Option<String>,
    pub name: String,
    pub team: Option<String>,
    pub position: Option<String>,
}

/// League reference found while discovering the user's leagues.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeagueRef {
    pub league_key: String,
    pub league_id: String,
    pub name: Option<String>,
}
