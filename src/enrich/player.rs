use serde::Serialize;

use crate::sleeper::types::{ExpertAdvice, MatchMethod};

/// Recent actual production over the weeks before the target week.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentPerformance {
    pub weeks_analyzed: usize,
    pub avg_points: f64,
    /// Population standard deviation of the weekly points
    pub std_dev: f64,
}

/// A Yahoo player with everything the secondary provider could add.
///
/// Every field past the identity block is optional; a player that could not
/// be matched to Sleeper keeps only its Yahoo data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnrichedPlayer {
    pub name: String,
    pub team: Option<String>,
    pub position: Option<String>,
    pub injury_status: Option<String>,
    pub bye: Option<u16>,

    pub yahoo_projection: Option<f64>,
    pub sleeper_projection: Option<f64>,
    pub sleeper_id: Option<String>,
    pub sleeper_match_method: Option<MatchMethod>,
    pub floor_projection: Option<f64>,
    pub ceiling_projection: Option<f64>,
    pub consistency_score: Option<f64>,
    pub player_tier: Option<String>,
    pub matchup_score: Option<f64>,
    pub matchup_description: Option<String>,
    pub trending_score: Option<f64>,
    pub risk_level: Option<String>,
    pub opponent: Option<String>,
    pub on_bye: bool,
    pub performance_flags: Vec<String>,
    pub enhancement_context: Option<String>,
    pub adjusted_projection: Option<f64>,
    pub recent_performance: Option<RecentPerformance>,
    pub expert: Option<ExpertAdvice>,
}

impl EnrichedPlayer {
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && self
                .position
                .as_deref()
                .is_some_and(|p| !p.trim().is_empty())
    }

    /// Yahoo plus Sleeper projection, missing sources counted as zero.
    pub fn total_projection(&self) -> f64 {
        self.yahoo_projection.unwrap_or(0.0) + self.sleeper_projection.unwrap_or(0.0)
    }

    /// Best single-source projection: Sleeper first, then Yahoo.
    pub fn base_projection(&self) -> Option<f64> {
        self.sleeper_projection.or(self.yahoo_projection)
    }
}
