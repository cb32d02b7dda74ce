//! Primary provider: Yahoo Fantasy Sports.

pub mod extract;
pub mod http;
pub mod types;

pub use http::{PrimaryProvider, YahooClient};
pub use types::{BasicPlayer, LeagueRef, YahooPlayerInfo};
