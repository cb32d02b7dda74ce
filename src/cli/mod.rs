//! CLI argument definitions and parsing.
//!
//! Every subcommand is a thin front end over a tool: it builds the same JSON
//! argument object a tool caller would send and goes through
//! [`crate::commands::dispatch`].

pub mod types;

use clap::{Args, Parser, Subcommand};
use serde_json::{json, Map, Value};

use crate::{commands::ToolName, error::FflError, Result};
use types::{LeagueKey, Position, Season, WaiverSort, Week};

#[derive(Debug, Parser)]
#[clap(name = "yahoo-ffl", about = "Yahoo Fantasy Football tools", version)]
pub struct YahooFfl {
    /// Pretty-print the JSON response.
    #[clap(long, global = true)]
    pub pretty: bool,

    /// Debug logging on stderr.
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Query players through one of the tools.
    Get {
        #[clap(subcommand)]
        cmd: GetCmd,
    },

    /// Call a tool by name with a raw JSON argument object.
    Tool {
        /// Tool name, e.g. `get-waiver-wire` or `ff_get_waiver_wire`.
        name: String,

        /// JSON object of tool arguments.
        #[clap(long, default_value = "{}")]
        args: String,
    },
}

/// Enrichment switches shared by the list commands.
#[derive(Debug, Args)]
pub struct EnhancementArgs {
    /// Add waiver priority, free-agent value and expert analysis.
    #[clap(long)]
    pub analysis: bool,

    /// Leave out Yahoo and Sleeper projections.
    #[clap(long)]
    pub no_projections: bool,

    /// Leave out Sleeper matchup and trending data.
    #[clap(long)]
    pub no_external_data: bool,

    /// Target week (defaults to the current NFL week).
    #[clap(long, short)]
    pub week: Option<Week>,
}

#[derive(Debug, Subcommand)]
pub enum GetCmd {
    /// Available free agents.
    Players {
        /// League key or id (or set `YAHOO_FFL_LEAGUE_KEY` env var).
        #[clap(long, short)]
        league_key: Option<LeagueKey>,

        /// Filter by position: QB, RB, WR, TE, K, DEF or FLEX.
        #[clap(long, short)]
        position: Option<Position>,

        /// Number of players (default 10).
        #[clap(long, short)]
        count: Option<usize>,

        #[clap(flatten)]
        enhancement: EnhancementArgs,
    },

    /// Waiver-wire candidates with ownership trends.
    WaiverWire {
        /// League key or id (or set `YAHOO_FFL_LEAGUE_KEY` env var).
        #[clap(long, short)]
        league_key: Option<LeagueKey>,

        /// Filter by position: QB, RB, WR, TE, K, DEF or FLEX.
        #[clap(long, short)]
        position: Option<Position>,

        /// Sort order.
        #[clap(long, short, value_enum, default_value_t = WaiverSort::Rank)]
        sort: WaiverSort,

        /// Number of players (default 30).
        #[clap(long, short)]
        count: Option<usize>,

        #[clap(flatten)]
        enhancement: EnhancementArgs,
    },

    /// Actual and projected points for one player, week by week.
    WeeklyPoints {
        /// League key or id (or set `YAHOO_FFL_LEAGUE_KEY` env var).
        #[clap(long, short)]
        league_key: Option<LeagueKey>,

        /// Yahoo player key or numeric id.
        #[clap(long)]
        player_id: String,

        /// Season year (defaults to the current NFL season).
        #[clap(long, short)]
        season: Option<Season>,

        /// First week (default 1).
        #[clap(long)]
        start_week: Option<Week>,

        /// Last week (defaults to the current week, capped at 18).
        #[clap(long)]
        end_week: Option<Week>,
    },
}

fn league_arg(league_key: Option<LeagueKey>, default_league: Option<&str>) -> Option<String> {
    league_key
        .map(|k| k.to_string())
        .or_else(|| default_league.map(str::to_string))
}

fn insert_opt<T: Into<Value>>(args: &mut Map<String, Value>, name: &str, value: Option<T>) {
    if let Some(v) = value {
        args.insert(name.to_string(), v.into());
    }
}

fn list_args(
    league_key: Option<String>,
    position: Option<Position>,
    count: Option<usize>,
    enhancement: &EnhancementArgs,
) -> Map<String, Value> {
    let mut args = Map::new();
    insert_opt(&mut args, "league_key", league_key);
    insert_opt(&mut args, "position", position.map(|p| p.to_string()));
    insert_opt(&mut args, "count", count.map(|c| c as u64));
    insert_opt(&mut args, "week", enhancement.week.map(|w| w.as_u16()));
    args.insert("include_analysis".into(), json!(enhancement.analysis));
    args.insert(
        "include_projections".into(),
        json!(!enhancement.no_projections),
    );
    args.insert(
        "include_external_data".into(),
        json!(!enhancement.no_external_data),
    );
    args
}

impl Commands {
    /// Tool and argument object this command stands for.
    ///
    /// A missing league key is left out so the tool reports it.
    pub fn into_tool_call(
        self,
        default_league: Option<&str>,
    ) -> Result<(ToolName, Map<String, Value>)> {
        match self {
            Commands::Tool { name, args } => {
                let tool = name.parse::<ToolName>()?;
                let parsed: Value = serde_json::from_str(&args)?;
                let Value::Object(map) = parsed else {
                    return Err(FflError::MissingArgument {
                        name: "args (a JSON object)".to_string(),
                    });
                };
                Ok((tool, map))
            }
            Commands::Get { cmd } => Ok(cmd.into_tool_call(default_league)),
        }
    }
}

impl GetCmd {
    pub fn into_tool_call(self, default_league: Option<&str>) -> (ToolName, Map<String, Value>) {
        match self {
            GetCmd::Players {
                league_key,
                position,
                count,
                enhancement,
            } => (
                ToolName::GetPlayers,
                list_args(
                    league_arg(league_key, default_league),
                    position,
                    count,
                    &enhancement,
                ),
            ),
            GetCmd::WaiverWire {
                league_key,
                position,
                sort,
                count,
                enhancement,
            } => {
                let mut args = list_args(
                    league_arg(league_key, default_league),
                    position,
                    count,
                    &enhancement,
                );
                args.insert("sort".into(), json!(sort.to_string()));
                (ToolName::GetWaiverWire, args)
            }
            GetCmd::WeeklyPoints {
                league_key,
                player_id,
                season,
                start_week,
                end_week,
            } => {
                let mut args = Map::new();
                insert_opt(
                    &mut args,
                    "league_id",
                    league_arg(league_key, default_league),
                );
                args.insert("player_id".into(), json!(player_id));
                insert_opt(&mut args, "season", season.map(|s| s.as_u16()));
                insert_opt(&mut args, "start_week", start_week.map(|w| w.as_u16()));
                insert_opt(&mut args, "end_week", end_week.map(|w| w.as_u16()));
                (ToolName::GetPlayerWeeklyPoints, args)
            }
        }
    }
}
