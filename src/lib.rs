//! Yahoo Fantasy Football Tools Library
//!
//! Player discovery for Yahoo Fantasy Football leagues, enriched with
//! projections, recent performance and trending data from Sleeper.
//!
//! ## Features
//!
//! - **Available Players**: Free agents with optional projections and free-agent value
//! - **Waiver Wire**: Ownership trends, expert tiers, waiver priority and pickup urgency
//! - **Weekly Points**: A player's actual and projected points over a week window
//! - **Graceful Degradation**: Yahoo data is always returned, with notes and warnings
//!   when Sleeper enrichment is partial or unavailable
//! - **Caching**: Sleeper's player directory and completed weeks are cached on disk
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use serde_json::json;
//! use yahoo_ffl::{commands::{dispatch, ToolContext}, config::Config, sleeper::SleeperClient, yahoo::YahooClient};
//!
//! # async fn example() -> yahoo_ffl::Result<()> {
//! let config = Config::from_env();
//! let yahoo = YahooClient::from_config(&config)?;
//! let sleeper = SleeperClient::from_config(&config)?;
//! let ctx = ToolContext::new(&yahoo, Some(&sleeper));
//!
//! let args = json!({"league_key": "nfl.l.123456", "include_analysis": true});
//! let response = dispatch(&ctx, "get-waiver-wire", args.as_object().unwrap()).await;
//! println!("{}", response);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set your Yahoo access token and default league:
//! ```bash
//! export YAHOO_ACCESS_TOKEN=...
//! export YAHOO_FFL_LEAGUE_KEY=nfl.l.123456
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod enrich;
pub mod error;
pub mod models;
pub mod scoring;
pub mod sleeper;
pub mod yahoo;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

// Re-export commonly used types
pub use cli::types::{LeagueKey, PlayerKey, Position, Season, WaiverSort, Week};
pub use config::LEAGUE_KEY_ENV_VAR;
pub use error::{FflError, Result, ToolError};
