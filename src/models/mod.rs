//! Response models for the tools.

pub mod output;

pub use output::{
    Algorithm, AnalysisContext, EnhancedPlayerView, Includes, PlayerListResponse, WeekLabel,
    WeeklyPoints, WeeklyPointsResponse, STATUS_SUCCESS,
};
