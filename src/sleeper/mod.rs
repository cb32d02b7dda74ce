//! Secondary provider: Sleeper projections, stats, trending adds and the
//! player directory used to map Yahoo names onto Sleeper ids.

pub mod advice;
pub mod directory;
pub mod http;
pub mod points;
pub mod types;

pub use directory::{normalize_name, PlayerDirectory};
pub use http::{SecondaryProvider, SleeperClient};
pub use types::{ExpertAdvice, MatchMethod, NflState, PlayerMatch, SleeperPlayer, TrendingPlayer};
