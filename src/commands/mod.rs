//! Tool handlers and dispatch.
//!
//! Each handler takes the providers through a [`ToolContext`] and a loose
//! JSON argument object, and answers with either its response model or a
//! structured [`ToolError`]. [`dispatch`] renders both as JSON.

pub mod common;
pub mod players;
pub mod waiver_wire;
pub mod weekly_points;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::{json, Map, Value};
use tracing::{debug, info};

use crate::{
    error::{FflError, ToolError},
    sleeper::SecondaryProvider,
    yahoo::PrimaryProvider,
};

pub use players::handle_get_players;
pub use waiver_wire::handle_get_waiver_wire;
pub use weekly_points::handle_get_player_weekly_points;


/// Reason reported when no secondary provider was supplied.
pub const SECONDARY_NOT_CONFIGURED: &str = "Sleeper provider not configured";

/// Providers available to a tool invocation.
///
/// The secondary provider is optional; without it the list tools answer with
/// Yahoo data only and the weekly-points tool fails.
pub struct ToolContext<'a> {
    pub primary: &'a dyn PrimaryProvider,
    pub secondary: Option<&'a dyn SecondaryProvider>,
    unavailable_reason: String,
}

impl<'a> ToolContext<'a> {
    pub fn new(
        primary: &'a dyn PrimaryProvider,
        secondary: Option<&'a dyn SecondaryProvider>,
    ) -> Self {
        Self {
            primary,
            secondary,
            unavailable_reason: SECONDARY_NOT_CONFIGURED.to_string(),
        }
    }

    /// Explain why the secondary provider is missing.
    pub fn with_unavailable_reason(mut self, reason: impl Into<String>) -> Self {
        self.unavailable_reason = reason.into();
        self
    }

    pub fn unavailable_reason(&self) -> &str {
        &self.unavailable_reason
    }
}

/// The tools this crate exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolName {
    GetPlayers,
    GetWaiverWire,
    GetPlayerWeeklyPoints,
}

impl ToolName {
    pub const ALL: [ToolName; 3] = [
        ToolName::GetPlayers,
        ToolName::GetWaiverWire,
        ToolName::GetPlayerWeeklyPoints,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ToolName::GetPlayers => "get-players",
            ToolName::GetWaiverWire => "get-waiver-wire",
            ToolName::GetPlayerWeeklyPoints => "get-player-weekly-points",
        }
    }

    /// Name the tool was registered under by earlier servers.
    pub fn legacy_alias(&self) -> &'static str {
        match self {
            ToolName::GetPlayers => "ff_get_players",
            ToolName::GetWaiverWire => "ff_get_waiver_wire",
            ToolName::GetPlayerWeeklyPoints => "ff_get_player_weekly_points",
        }
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ToolName {
    type Err = FflError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        ToolName::ALL
            .into_iter()
            .find(|tool| tool.as_str() == name || tool.legacy_alias() == name)
            .ok_or_else(|| FflError::UnknownTool {
                name: name.to_string(),
            })
    }
}

fn render<T: Serialize>(result: Result<T, ToolError>) -> Value {
    let rendered = match result {
        Ok(response) => serde_json::to_value(response),
        Err(err) => serde_json::to_value(err),
    };
    rendered.unwrap_or_else(|e| {
        json!({
            "status": "error",
            "error": "internal_error",
            "message": format!("Failed to serialize response: {e}"),
        })
    })
}

/// Run a tool by name (or legacy alias) and render its JSON answer.
pub async fn dispatch(ctx: &ToolContext<'_>, name: &str, args: &Map<String, Value>) -> Value {
    let tool = match name.parse::<ToolName>() {
        Ok(tool) => tool,
        Err(e) => return render::<()>(Err(e.into())),
    };
    info!(tool = %tool, "dispatching tool");
    debug!(?args, "tool arguments");

    match tool {
        ToolName::GetPlayers => render(handle_get_players(ctx, args).await),
        ToolName::GetWaiverWire => render(handle_get_waiver_wire(ctx, args).await),
        ToolName::GetPlayerWeeklyPoints => {
            render(handle_get_player_weekly_points(ctx, args).await)
        }
    }
}
