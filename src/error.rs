//! Error types for the Yahoo Fantasy Football tools

use serde::Serialize;
use thiserror::Error;


pub type Result<T> = std::result::Result<T, FflError>;

#[derive(Error, Debug)]
pub enum FflError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("{env_var} environment variable not set")]
    MissingCredentials { env_var: String },

    #[error("{name} is required")]
    MissingArgument { name: String },

    #[error("Unknown tool: {name}")]
    UnknownTool { name: String },

    #[error("Provider returned no data")]
    NoData,

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("Player not found: {name}")]
    PlayerNotFound { name: String },
}

/// Failure of a single enrichment sub-call.
///
/// These never abort a batch; callers turn them into warning strings and
/// substitute defaults.
#[derive(Error, Debug)]
pub enum EnrichmentError {
    #[error("expert advice unavailable for {player}: {reason}")]
    ExpertAdvice { player: String, reason: String },

    #[error("Week {week}: Sleeper stats unavailable ({reason})")]
    Stats { week: u16, reason: String },

    #[error("Week {week}: Sleeper projections unavailable ({reason})")]
    Projections { week: u16, reason: String },

    #[error("trending adds unavailable: {reason}")]
    Trending { reason: String },
}

/// Structured error object returned to tool callers instead of an exception.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolError {
    pub status: &'static str,
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub league_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_key: Option<String>,
}

impl ToolError {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status: "error",
            error: error.into(),
            message: message.into(),
            league_key: None,
            player_key: None,
        }
    }

    pub fn with_keys(mut self, league_key: &str, player_key: &str) -> Self {
        self.league_key = Some(league_key.to_string());
        self.player_key = Some(player_key.to_string());
        self
    }
}

impl From<FflError> for ToolError {
    fn from(err: FflError) -> Self {
        let code = match &err {
            FflError::MissingArgument { name } => format!("missing_{name}"),
            FflError::MissingCredentials { .. } => "missing_credentials".to_string(),
            FflError::UnknownTool { .. } => "unknown_tool".to_string(),
            FflError::PlayerNotFound { .. } => "player_not_found".to_string(),
            FflError::Http(_) => "http_error".to_string(),
            _ => "internal_error".to_string(),
        };
        ToolError::new(code, err.to_string())
    }
}
