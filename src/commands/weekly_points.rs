//! `get-player-weekly-points`: a player's actual and projected points by week.

use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::{
    cli::types::time::week_window,
    commands::{
        common::{arg_int, arg_str},
        ToolContext,
    },
    core::json::round_to,
    error::{EnrichmentError, ToolError},
    models::{WeeklyPoints, WeeklyPointsResponse, STATUS_SUCCESS},
    sleeper::points::{earned_points, player_row, projection_points},
    yahoo::http::{fetch_player_info, resolve_league_key},
    PlayerKey, Season, Week,
};

/// First non-empty argument among `names`.
fn first_arg(args: &Map<String, Value>, names: &[&str]) -> Option<String> {
    names.iter().find_map(|name| arg_str(args, name))
}

fn points(value: Option<f64>) -> Option<f64> {
    value.map(|v| round_to(v, 2))
}

/// Resolve a Yahoo player to Sleeper and report each week in the window.
pub async fn handle_get_player_weekly_points(
    ctx: &ToolContext<'_>,
    args: &Map<String, Value>,
) -> Result<WeeklyPointsResponse, ToolError> {
    let league_input = first_arg(args, &["league_id", "league_key"]).ok_or_else(|| {
        ToolError::new("missing_league_id", "league_id (or league_key) is required")
    })?;
    let player_input = first_arg(args, &["player_id", "player_key"]).ok_or_else(|| {
        ToolError::new("missing_player_id", "player_id (or player_key) is required")
    })?;

    let league_key = resolve_league_key(ctx.primary, &league_input).await;
    let player_key = PlayerKey::from_raw(&player_input);
    debug!(league = %league_key, player = %player_key, "resolved keys");

    let info = fetch_player_info(ctx.primary, &league_key, &player_key)
        .await
        .map_err(|e| {
            ToolError::new(
                "yahoo_player_lookup_failed",
                format!("Failed to fetch player details from Yahoo: {}", e),
            )
        })?
        .ok_or_else(|| {
            ToolError::new("player_not_found", "Could not locate player in Yahoo response")
                .with_keys(league_key.as_str(), player_key.as_str())
        })?;

    let Some(secondary) = ctx.secondary else {
        return Err(ToolError::new(
            "sleeper_unavailable",
            format!("Sleeper API unavailable: {}", ctx.unavailable_reason()),
        ));
    };

    let matched = secondary
        .map_player(&info.name, info.position.as_deref(), info.team.as_deref())
        .await
        .map_err(|e| {
            ToolError::new(
                "sleeper_mapping_failed",
                format!("Unable to map Yahoo player to Sleeper: {}", e),
            )
        })?
        .ok_or_else(|| {
            ToolError::new(
                "sleeper_id_missing",
                "Unable to resolve Sleeper player ID for the specified player. Consider providing the full Yahoo player_key.",
            )
        })?;

    let state = secondary.nfl_state().await.map_err(|e| {
        ToolError::new(
            "sleeper_state_failed",
            format!("Unable to determine current NFL season/week: {}", e),
        )
    })?;
    let season = arg_int(args, "season")
        .and_then(|s| u16::try_from(s).ok())
        .map(Season::new)
        .unwrap_or_else(|| state.season());
    let (start, end) = week_window(
        arg_int(args, "start_week"),
        arg_int(args, "end_week"),
        state.week(),
    );
    info!(
        player = %info.name,
        sleeper_id = %matched.sleeper_id,
        season = %season,
        start = %start,
        end = %end,
        "collecting weekly points"
    );

    let mut warnings = Vec::new();
    let mut weeks = Vec::new();
    for week in start.as_u16()..=end.as_u16() {
        let week = Week::new(week);

        let earned = match secondary.weekly_stats(season, week).await {
            Ok(stats) => player_row(&stats, &matched.sleeper_id).and_then(earned_points),
            Err(e) => {
                let err = EnrichmentError::Stats {
                    week: week.as_u16(),
                    reason: e.to_string(),
                };
                warn!(error = %err, "weekly stats missing");
                warnings.push(err.to_string());
                None
            }
        };
        let projected = match secondary.weekly_projections(season, week).await {
            Ok(projections) => {
                player_row(&projections, &matched.sleeper_id).and_then(projection_points)
            }
            Err(e) => {
                let err = EnrichmentError::Projections {
                    week: week.as_u16(),
                    reason: e.to_string(),
                };
                warn!(error = %err, "weekly projections missing");
                warnings.push(err.to_string());
                None
            }
        };

        weeks.push(WeeklyPoints {
            week_number: week.as_u16(),
            earned_points: points(earned),
            sleeper_projected_points: points(projected),
        });
    }

    Ok(WeeklyPointsResponse {
        status: STATUS_SUCCESS,
        league_key: league_key.to_string(),
        league_id: league_input,
        player_name: info.name,
        player_key: info.player_key,
        yahoo_player_id: info.yahoo_player_id,
        position: info.position,
        team: info.team,
        sleeper_id: matched.sleeper_id,
        season: season.as_u16(),
        start_week: start.as_u16(),
        end_week: end.as_u16(),
        weeks,
        warnings,
    })
}
