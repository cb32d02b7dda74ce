//! Waiver priority, pickup urgency, positional scarcity and free-agent value.

pub mod scarcity;
pub mod waiver;

pub use scarcity::{position_scarcity, scarcity_note, PositionScarcity, UNKNOWN_POSITION};
pub use waiver::{
    free_agent_value, waiver_priority, PickupUrgency, WaiverInputs, WaiverScore,
    WAIVER_PRIORITY_WEIGHTS,
};
