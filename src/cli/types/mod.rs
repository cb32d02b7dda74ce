//! Type-safe wrappers and enums for Yahoo Fantasy Football data.

pub mod filters;
pub mod ids;
pub mod position;
pub mod time;

pub use filters::WaiverSort;
pub use ids::{LeagueKey, PlayerKey};
pub use position::Position;
pub use time::{Season, Week, MAX_WEEK};
