//! `get-waiver-wire`: waiver candidates with priority scoring.

use std::collections::{BTreeMap, HashMap};

use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::{
    commands::{
        common::{
            arg_count, arg_str, arg_week, base_view, position_filter, require_league_key,
            sort_desc_by, view_projection, week_label, EnhancementFlags,
        },
        ToolContext,
    },
    enrich::{
        attach_expert_advice, enhance_players, index_by_name, EnhanceOptions, EnrichedPlayer,
        NameKey,
    },
    error::ToolError,
    models::{Algorithm, AnalysisContext, EnhancedPlayerView, PlayerListResponse},
    scoring::{
        position_scarcity, scarcity_note, waiver_priority, PositionScarcity, WaiverInputs,
        UNKNOWN_POSITION, WAIVER_PRIORITY_WEIGHTS,
    },
    sleeper::{ExpertAdvice, TrendingPlayer},
    yahoo::{http::fetch_waiver_wire_players, BasicPlayer},
    WaiverSort,
};

#[cfg(test)]
mod tests;

pub const DEFAULT_COUNT: usize = 30;
pub const NO_PLAYERS_MESSAGE: &str = "No available players found matching the criteria";

fn features(flags: EnhancementFlags) -> Vec<&'static str> {
    [
        Some("Yahoo ownership and change data"),
        flags
            .include_external_data
            .then_some("Sleeper projections and rankings"),
        flags.include_external_data.then_some("Matchup analysis"),
        flags.include_analysis.then_some("Expert tier classification"),
        flags.include_analysis.then_some("Waiver priority scoring"),
        flags.include_analysis.then_some("Pickup urgency assessment"),
        flags.include_analysis.then_some("Positional scarcity analysis"),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn algorithm() -> Algorithm {
    Algorithm {
        waiver_priority_weights: WAIVER_PRIORITY_WEIGHTS.into_iter().collect(),
    }
}

/// Per-request inputs to scoring that are not on the player itself.
struct ScoringTables<'a> {
    trending: HashMap<NameKey, &'a TrendingPlayer>,
    scarcity: BTreeMap<String, PositionScarcity>,
}

fn waiver_view(
    player: &EnrichedPlayer,
    basic: Option<&BasicPlayer>,
    flags: EnhancementFlags,
    tables: &ScoringTables<'_>,
) -> EnhancedPlayerView {
    let mut view = base_view(player, basic, flags);
    view.weekly_change = basic.and_then(|b| b.weekly_change);

    // Trending fields only appear for players on the trending list
    let trending = tables.trending.get(&NameKey::new(&player.name));
    view.trending_count = trending.map(|t| t.count);
    view.trending_position = trending.and_then(|t| t.position.clone());
    let trending_count = view.trending_count.unwrap_or(0);

    if !flags.include_analysis {
        return view;
    }

    let expert = player
        .expert
        .clone()
        .unwrap_or_else(ExpertAdvice::unavailable);
    view.expert_tier = Some(expert.tier.clone());
    view.expert_recommendation = Some(expert.recommendation.clone());
    view.expert_confidence = Some(expert.confidence);
    view.expert_advice = Some(expert.advice.clone());

    let position = player
        .position
        .clone()
        .unwrap_or_else(|| UNKNOWN_POSITION.to_string());
    let context = tables.scarcity.get(&position).copied().unwrap_or_default();
    let total_projection = player.total_projection();

    let score = waiver_priority(&WaiverInputs {
        expert_confidence: expert.confidence,
        total_projection,
        owned_pct: view.owned_pct,
        trending_count,
        position_scarcity: context.scarcity_score,
    });
    let priority = score.reported();

    view.waiver_priority = Some(priority);
    view.pickup_urgency = Some(score.urgency);
    view.position_context = Some(context);
    view.analysis = Some(format!(
        "{} tier player with {}% confidence. Recommendation: {}. Priority: {}/100 (proj: {:.1}, owned: {:.1}%, trending: {}){}",
        expert.tier,
        expert.confidence,
        expert.recommendation,
        priority,
        total_projection,
        view.owned_pct,
        trending_count,
        scarcity_note(&position, context.scarcity_score).unwrap_or_default(),
    ));
    view
}

/// Waiver-wire candidates, scored when analysis is requested.
pub async fn handle_get_waiver_wire(
    ctx: &ToolContext<'_>,
    args: &Map<String, Value>,
) -> Result<PlayerListResponse, ToolError> {
    let league_key = require_league_key(args)?;
    let (position, filter) = position_filter(args);
    let sort = WaiverSort::parse_or_default(arg_str(args, "sort").as_deref());
    let count = arg_count(args, "count", DEFAULT_COUNT);
    let week = arg_week(args, "week");
    let flags = EnhancementFlags::from_args(args);

    let mut players =
        fetch_waiver_wire_players(ctx.primary, &league_key, filter.as_deref(), sort, count)
            .await?;
    players.truncate(count);
    info!(league = %league_key, sort = %sort, count = players.len(), "fetched waiver wire");

    let mut response = PlayerListResponse::basic(league_key.as_str(), &position, players);
    response.sort = Some(sort.to_string());

    if response.players.is_empty() {
        response.message = Some(NO_PLAYERS_MESSAGE.to_string());
        return Ok(response);
    }
    if !flags.needs_enhancement() {
        return Ok(response);
    }

    let Some(secondary) = ctx.secondary else {
        response.note = Some(format!(
            "Enhanced data unavailable: {}",
            ctx.unavailable_reason()
        ));
        return Ok(response);
    };

    let options = EnhanceOptions {
        week,
        trending_limit: count,
    };
    let mut enhancement = match enhance_players(&response.players, secondary, &options).await {
        Ok(enhancement) => enhancement,
        Err(e) => {
            warn!(error = %e, "waiver enhancement failed");
            response.note = Some(format!("Enhancement failed: {}. Using basic data.", e));
            return Ok(response);
        }
    };
    if enhancement.players.is_empty() {
        response.note = Some("No players could be enhanced".to_string());
        return Ok(response);
    }

    if flags.include_analysis {
        attach_expert_advice(
            &mut enhancement.players,
            secondary,
            enhancement.week,
            &mut enhancement.warnings,
        )
        .await;
    }

    let tables = ScoringTables {
        trending: index_by_name(&enhancement.trending, |t| t.name.as_str()),
        scarcity: position_scarcity(&response.players),
    };
    let basic_by_name = index_by_name(&response.players, |p| p.name.as_str());
    let mut views: Vec<EnhancedPlayerView> = enhancement
        .players
        .iter()
        .filter(|p| p.is_valid())
        .map(|p| {
            let basic = basic_by_name.get(&NameKey::new(&p.name)).copied();
            waiver_view(p, basic, flags, &tables)
        })
        .collect();

    if flags.include_analysis {
        sort_desc_by(&mut views, |v| v.waiver_priority.unwrap_or(0.0));
    } else if flags.include_projections {
        sort_desc_by(&mut views, view_projection);
    }
    views.truncate(count);

    let analysis_context = AnalysisContext {
        data_sources: flags.data_sources(),
        includes: flags.includes(Some(flags.include_analysis)),
        features: features(flags),
        algorithm: flags.include_analysis.then(algorithm),
        position_scarcity: flags.include_analysis.then(|| tables.scarcity.clone()),
        week: week_label(week),
        trending_count: enhancement.trending.len(),
    };

    response.analysis_context = Some(analysis_context);
    response.enhanced_players = Some(views);
    response.warnings = enhancement.warnings;
    Ok(response)
}
