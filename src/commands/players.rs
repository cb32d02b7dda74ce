//! `get-players`: available free agents, optionally enriched.

use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::{
    commands::{
        common::{
            arg_count, arg_week, base_view, position_filter, require_league_key, sort_desc_by,
            view_projection, week_label, EnhancementFlags,
        },
        ToolContext,
    },
    enrich::{enhance_players, index_by_name, EnhanceOptions, EnrichedPlayer, NameKey},
    error::ToolError,
    models::{AnalysisContext, EnhancedPlayerView, PlayerListResponse},
    scoring::free_agent_value,
    yahoo::{http::fetch_available_players, BasicPlayer},
};

pub const DEFAULT_COUNT: usize = 10;

fn features(flags: EnhancementFlags) -> Vec<&'static str> {
    [
        Some("Yahoo ownership data"),
        flags
            .include_external_data
            .then_some("Sleeper projections and rankings"),
        flags.include_external_data.then_some("Matchup analysis"),
        flags.include_analysis.then_some("Free agent value scoring"),
        flags.include_analysis.then_some("Recent performance trends"),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Analysis line for a free agent.
fn free_agent_analysis(player: &EnrichedPlayer, owned_pct: f64) -> String {
    if player.on_bye {
        return "ON BYE - Do not add this week".to_string();
    }
    let mut parts = vec![format!(
        "Low ownership ({}%), proj ({:.1})",
        owned_pct,
        player.total_projection()
    )];
    if let Some(recent) = &player.recent_performance {
        parts.push(format!(
            "L{}W avg: {:.1}",
            recent.weeks_analyzed, recent.avg_points
        ));
    }
    if !player.performance_flags.is_empty() {
        parts.push(player.performance_flags.join(", "));
    }
    parts.join(" | ")
}

fn player_view(
    player: &EnrichedPlayer,
    basic: Option<&BasicPlayer>,
    flags: EnhancementFlags,
) -> EnhancedPlayerView {
    let mut view = base_view(player, basic, flags);

    if flags.include_external_data {
        view.bye_week = player.bye;
        view.on_bye = Some(player.on_bye);
        view.performance_flags = Some(player.performance_flags.clone());
        view.enhancement_context = player.enhancement_context.clone();
        view.adjusted_projection = player.adjusted_projection;
    } else {
        view.on_bye = Some(false);
        view.performance_flags = Some(Vec::new());
    }

    if flags.include_analysis {
        let owned = view.owned_pct;
        view.free_agent_value = Some(free_agent_value(
            player.total_projection(),
            owned,
            player.on_bye,
        ));
        view.analysis = Some(free_agent_analysis(player, owned));
    }
    view
}

/// List available players, enhancing them when any flag asks for it.
pub async fn handle_get_players(
    ctx: &ToolContext<'_>,
    args: &Map<String, Value>,
) -> Result<PlayerListResponse, ToolError> {
    let league_key = require_league_key(args)?;
    let (position, filter) = position_filter(args);
    let count = arg_count(args, "count", DEFAULT_COUNT);
    let week = arg_week(args, "week");
    let flags = EnhancementFlags::from_args(args);

    let mut players =
        fetch_available_players(ctx.primary, &league_key, filter.as_deref(), count).await?;
    players.truncate(count);
    info!(league = %league_key, count = players.len(), "fetched available players");

    let mut response = PlayerListResponse::basic(league_key.as_str(), &position, players);
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
    let enhancement = match enhance_players(&response.players, secondary, &options).await {
        Ok(enhancement) => enhancement,
        Err(e) => {
            warn!(error = %e, "player enhancement failed");
            response.note = Some(format!("Enhancement failed: {}. Using basic data.", e));
            return Ok(response);
        }
    };
    if enhancement.players.is_empty() {
        response.note = Some("No players could be enhanced".to_string());
        return Ok(response);
    }

    let basic_by_name = index_by_name(&response.players, |p| p.name.as_str());
    let mut views: Vec<EnhancedPlayerView> = enhancement
        .players
        .iter()
        .filter(|p| p.is_valid())
        .map(|p| {
            let basic = basic_by_name.get(&NameKey::new(&p.name)).copied();
            player_view(p, basic, flags)
        })
        .collect();

    if flags.include_analysis {
        sort_desc_by(&mut views, |v| v.free_agent_value.unwrap_or(0.0));
    } else if flags.include_projections {
        sort_desc_by(&mut views, view_projection);
    }
    views.truncate(count);

    response.analysis_context = Some(AnalysisContext {
        data_sources: flags.data_sources(),
        includes: flags.includes(None),
        features: features(flags),
        algorithm: None,
        position_scarcity: None,
        week: week_label(week),
        trending_count: enhancement.trending.len(),
    });
    response.enhanced_players = Some(views);
    response.warnings = enhancement.warnings;
    Ok(response)
}
