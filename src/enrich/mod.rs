//! Enrichment of Yahoo players with Sleeper data.

pub mod name_key;
pub mod pipeline;
pub mod player;

pub use name_key::{index_by_name, NameKey};
pub use pipeline::{attach_expert_advice, enhance_players, EnhanceOptions, Enhancement};
pub use player::{EnrichedPlayer, RecentPerformance};
