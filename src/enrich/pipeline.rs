//! Enhancement pipeline: Yahoo basic players plus Sleeper data.
//!
//! The NFL state and the player directory are required; without them
//! nothing can be matched and the whole enhancement fails. Every other
//! sub-call (projections, recent stats, trending adds, expert advice)
//! degrades to a warning and a default.

use std::collections::{HashMap, HashSet};

use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    core::json::{round1, round_to},
    enrich::{
        name_key::NameKey,
        player::{EnrichedPlayer, RecentPerformance},
    },
    error::EnrichmentError,
    sleeper::{
        advice::tier_for,
        points::{earned_points, opponent, player_row, projection_points},
        types::{ExpertAdvice, PlayerMatch, TrendingPlayer},
        SecondaryProvider,
    },
    yahoo::BasicPlayer,
    Result, Season, Week,
};


/// Weeks of recent stats used for floor/ceiling and consistency.
pub const RECENT_WEEKS: u16 = 3;

const DEFAULT_FLOOR_FACTOR: f64 = 0.75;
const DEFAULT_CEILING_FACTOR: f64 = 1.3;
const FAVORABLE_MATCHUP: f64 = 65.0;
const DIFFICULT_MATCHUP: f64 = 35.0;
const HOT_FACTOR: f64 = 1.2;
const COLD_FACTOR: f64 = 0.8;
const TRENDING_FLAG_COUNT: u32 = 1000;

#[derive(Debug, Clone, Default)]
pub struct EnhanceOptions {
    /// Target week; `None` means the current NFL week.
    pub week: Option<Week>,
    /// How many trending adds to request.
    pub trending_limit: usize,
}

#[derive(Debug, Clone)]
pub struct Enhancement {
    pub players: Vec<EnrichedPlayer>,
    pub trending: Vec<TrendingPlayer>,
    pub warnings: Vec<String>,
    pub season: Season,
    pub week: Week,
}

/// Per-week payloads shared by every player in the batch.
struct WeekData {
    projections: Option<Value>,
    recent_stats: Vec<(Week, Value)>,
    trending_counts: HashMap<String, u32>,
}

fn warn_with(warnings: &mut Vec<String>, err: EnrichmentError) {
    warn!(error = %err, "enrichment degraded");
    warnings.push(err.to_string());
}

/// Build enriched records for `basic`, one per distinct name.
pub async fn enhance_players(
    basic: &[BasicPlayer],
    provider: &dyn SecondaryProvider,
    options: &EnhanceOptions,
) -> Result<Enhancement> {
    let state = provider.nfl_state().await?;
    let season = state.season();
    let week = options.week.unwrap_or_else(|| state.week());
    let directory = provider.player_directory().await?;

    let mut warnings = Vec::new();

    let projections = match provider.weekly_projections(season, week).await {
        Ok(v) => Some(v),
        Err(e) => {
            warn_with(
                &mut warnings,
                EnrichmentError::Projections {
                    week: week.as_u16(),
                    reason: e.to_string(),
                },
            );
            None
        }
    };

    let mut recent_stats = Vec::new();
    for prior in week.previous(RECENT_WEEKS) {
        match provider.weekly_stats(season, prior).await {
            Ok(v) => recent_stats.push((prior, v)),
            Err(e) => warn_with(
                &mut warnings,
                EnrichmentError::Stats {
                    week: prior.as_u16(),
                    reason: e.to_string(),
                },
            ),
        }
    }

    let trending = match provider.trending_adds(options.trending_limit.max(1)).await {
        Ok(t) => t,
        Err(e) => {
            warn_with(
                &mut warnings,
                EnrichmentError::Trending {
                    reason: e.to_string(),
                },
            );
            Vec::new()
        }
    };

    let data = WeekData {
        projections,
        recent_stats,
        trending_counts: trending
            .iter()
            .map(|t| (t.player_id.clone(), t.count))
            .collect(),
    };

    let mut seen = HashSet::new();
    let mut players = Vec::with_capacity(basic.len());
    for bp in basic {
        if !seen.insert(NameKey::new(&bp.name)) {
            debug!(name = %bp.name, "duplicate name skipped");
            continue;
        }
        let matched = directory.find(&bp.name, bp.position.as_deref(), bp.team.as_deref());
        let player = enrich_one(bp, week, &data, matched.as_ref());
        players.push(player);
    }

    debug!(
        players = players.len(),
        matched = players.iter().filter(|p| p.sleeper_id.is_some()).count(),
        %week,
        "enhancement complete"
    );

    Ok(Enhancement {
        players,
        trending,
        warnings,
        season,
        week,
    })
}

fn enrich_one(
    bp: &BasicPlayer,
    week: Week,
    data: &WeekData,
    matched: Option<&PlayerMatch>,
) -> EnrichedPlayer {
    let sleeper_id = matched.map(|m| m.sleeper_id.as_str());
    let mut player = EnrichedPlayer {
        name: bp.name.clone(),
        team: bp.team.clone(),
        position: bp.position.clone(),
        injury_status: bp
            .injury_status
            .clone()
            .or_else(|| matched.and_then(|m| m.player.injury_status.clone())),
        bye: bp.bye_week(),
        sleeper_match_method: matched.map(|m| m.method),
        yahoo_projection: bp.projected_points.map(|p| round_to(p, 2)),
        ..Default::default()
    };
    player.on_bye = player.bye == Some(week.as_u16());

    if let Some(id) = sleeper_id {
        player.sleeper_id = Some(id.to_string());

        let row = data.projections.as_ref().and_then(|p| player_row(p, id));
        player.sleeper_projection = row.and_then(projection_points).map(|p| round_to(p, 2));
        player.opponent = row.and_then(opponent);

        let weekly: Vec<f64> = data
            .recent_stats
            .iter()
            .filter_map(|(_, stats)| player_row(stats, id).and_then(earned_points))
            .collect();
        player.recent_performance = recent_performance(&weekly);

        player.trending_score = data
            .trending_counts
            .get(id)
            .map(|&count| trending_score(count));
    }

    apply_projection_range(&mut player);
    apply_matchup(&mut player);
    player.player_tier = player.base_projection().map(|p| tier_for(p).to_string());
    apply_risk(&mut player);

    let count = sleeper_id
        .and_then(|id| data.trending_counts.get(id))
        .copied()
        .unwrap_or(0);
    player.performance_flags = performance_flags(&player, count);
    player.enhancement_context = Some(enhancement_context(&player, week));
    player
}

fn recent_performance(weekly: &[f64]) -> Option<RecentPerformance> {
    if weekly.is_empty() {
        return None;
    }
    let n = weekly.len() as f64;
    let avg = weekly.iter().sum::<f64>() / n;
    let variance = weekly.iter().map(|p| (p - avg).powi(2)).sum::<f64>() / n;
    Some(RecentPerformance {
        weeks_analyzed: weekly.len(),
        avg_points: round_to(avg, 2),
        std_dev: round_to(variance.sqrt(), 2),
    })
}

/// Floor/ceiling from recent spread, or fixed factors without history.
fn apply_projection_range(player: &mut EnrichedPlayer) {
    let Some(proj) = player.base_projection() else {
        return;
    };
    match player.recent_performance.as_ref().filter(|r| r.weeks_analyzed >= 2) {
        Some(recent) => {
            player.floor_projection = Some(round1((proj - recent.std_dev).max(0.0)));
            player.ceiling_projection = Some(round1(proj + recent.std_dev));
            if recent.avg_points > 0.0 {
                let cv = recent.std_dev / recent.avg_points;
                player.consistency_score = Some(round1((100.0 * (1.0 - cv)).clamp(0.0, 100.0)));
            }
        }
        None => {
            player.floor_projection = Some(round1(proj * DEFAULT_FLOOR_FACTOR));
            player.ceiling_projection = Some(round1(proj * DEFAULT_CEILING_FACTOR));
        }
    }
}

/// Matchup strength from this week's projection against recent output.
fn apply_matchup(player: &mut EnrichedPlayer) {
    let Some(proj) = player.sleeper_projection else {
        return;
    };
    let Some(avg) = player
        .recent_performance
        .as_ref()
        .map(|r| r.avg_points)
        .filter(|a| *a > 0.0)
    else {
        return;
    };

    let score = round1((50.0 + 50.0 * (proj - avg) / avg).clamp(0.0, 100.0));
    let label = if score >= FAVORABLE_MATCHUP {
        "Favorable matchup"
    } else if score <= DIFFICULT_MATCHUP {
        "Difficult matchup"
    } else {
        "Neutral matchup"
    };
    player.matchup_score = Some(score);
    player.matchup_description = Some(match player.opponent.as_deref() {
        Some(opp) => format!("{} vs {}", label, opp),
        None => label.to_string(),
    });
}

pub fn trending_score(count: u32) -> f64 {
    round1((20.0 * (1.0 + f64::from(count)).log10()).min(100.0))
}

/// Projection multiplier for an injury designation.
pub fn injury_multiplier(status: Option<&str>) -> f64 {
    match status.map(|s| s.trim().to_ascii_uppercase()).as_deref() {
        Some("Q") | Some("QUESTIONABLE") => 0.85,
        Some("D") | Some("DOUBTFUL") => 0.5,
        Some("O") | Some("OUT") | Some("IR") | Some("PUP") | Some("SUSP") | Some("NA") => 0.0,
        _ => 1.0,
    }
}

pub fn risk_level(status: Option<&str>) -> &'static str {
    let multiplier = injury_multiplier(status);
    if multiplier >= 1.0 {
        "Low"
    } else if multiplier >= 0.85 {
        "Medium"
    } else if multiplier > 0.0 {
        "High"
    } else {
        "Very High"
    }
}

fn apply_risk(player: &mut EnrichedPlayer) {
    let status = player.injury_status.as_deref();
    player.risk_level = Some(risk_level(status).to_string());

    player.adjusted_projection = if player.on_bye {
        Some(0.0)
    } else {
        player
            .base_projection()
            .map(|p| round_to(p * injury_multiplier(status), 2))
    };
}

fn performance_flags(player: &EnrichedPlayer, trending_count: u32) -> Vec<String> {
    let mut flags = Vec::new();
    if player.on_bye {
        flags.push("ON BYE".to_string());
    }
    if let Some(status) = player
        .injury_status
        .as_deref()
        .filter(|s| injury_multiplier(Some(*s)) < 1.0)
    {
        flags.push(format!("INJURY: {}", status));
    }
    if let (Some(recent), Some(proj)) = (player.recent_performance.as_ref(), player.base_projection()) {
        if proj > 0.0 && recent.avg_points >= proj * HOT_FACTOR {
            flags.push("HOT STREAK".to_string());
        } else if proj > 0.0 && recent.avg_points <= proj * COLD_FACTOR {
            flags.push("COLD STREAK".to_string());
        }
    }
    if trending_count >= TRENDING_FLAG_COUNT {
        flags.push("TRENDING UP".to_string());
    }
    flags
}

fn enhancement_context(player: &EnrichedPlayer, week: Week) -> String {
    if player.on_bye {
        return format!("Week {} bye", week);
    }
    if player.sleeper_id.is_none() {
        return "No Sleeper match; Yahoo data only".to_string();
    }

    let mut parts = Vec::new();
    if let Some(proj) = player.sleeper_projection {
        match player.opponent.as_deref() {
            Some(opp) => parts.push(format!("Week {} proj {:.1} vs {}", week, proj, opp)),
            None => parts.push(format!("Week {} proj {:.1}", week, proj)),
        }
    }
    if let Some(recent) = player.recent_performance.as_ref() {
        parts.push(format!(
            "L{}W avg {:.1}",
            recent.weeks_analyzed, recent.avg_points
        ));
    }
    if parts.is_empty() {
        "No Sleeper projection this week".to_string()
    } else {
        parts.join(", ")
    }
}

/// Attach expert advice to each player, substituting defaults on failure.
pub async fn attach_expert_advice(
    players: &mut [EnrichedPlayer],
    provider: &dyn SecondaryProvider,
    week: Week,
    warnings: &mut Vec<String>,
) {
    for player in players.iter_mut() {
        let advice = provider
            .expert_advice(&player.name, Some(week))
            .await
            .map_err(|e| EnrichmentError::ExpertAdvice {
                player: player.name.clone(),
                reason: e.to_string(),
            });
        player.expert = Some(match advice {
            Ok(advice) => advice,
            Err(err) => {
                warn_with(warnings, err);
                ExpertAdvice::unavailable()
            }
        });
    }
}
