//! Waiver priority and free-agent value.

use serde::Serialize;

use crate::core::json::round1;

#[cfg(test)]
mod tests;

pub const EXPERT_CONFIDENCE_WEIGHT: f64 = 0.35;
pub const PROJECTION_MULTIPLIER: f64 = 2.0;
pub const PROJECTION_CAP: f64 = 30.0;
pub const OWNERSHIP_PIVOT: f64 = 50.0;
pub const OWNERSHIP_RATE: f64 = 0.4;
pub const TRENDING_MULTIPLIER: f64 = 1.5;
pub const TRENDING_CAP: f64 = 10.0;
pub const SCARCITY_MULTIPLIER: f64 = 0.5;
pub const SCARCITY_CAP: f64 = 5.0;
/// Scarcity bonus counts this many times again toward urgency.
pub const URGENCY_SCARCITY_FACTOR: f64 = 2.0;

/// Share of the 100-point scale each component can contribute, for display.
pub const WAIVER_PRIORITY_WEIGHTS: [(&str, &str); 5] = [
    ("expert_confidence", "35%"),
    ("projections", "30%"),
    ("ownership_bonus", "20%"),
    ("trending_bonus", "10%"),
    ("scarcity_bonus", "5%"),
];

/// How urgently a waiver candidate should be claimed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PickupUrgency {
    Avoid,
    Low,
    Moderate,
    High,
    MustAdd,
}

impl PickupUrgency {
    /// Tier for an urgency threshold; lower bounds are inclusive.
    pub fn from_threshold(threshold: f64) -> Self {
        if threshold >= 80.0 {
            PickupUrgency::MustAdd
        } else if threshold >= 65.0 {
            PickupUrgency::High
        } else if threshold >= 50.0 {
            PickupUrgency::Moderate
        } else if threshold >= 35.0 {
            PickupUrgency::Low
        } else {
            PickupUrgency::Avoid
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PickupUrgency::MustAdd => "MUST ADD - Elite waiver target",
            PickupUrgency::High => "High Priority - Strong pickup",
            PickupUrgency::Moderate => "Moderate - Worth a claim",
            PickupUrgency::Low => "Low Priority - Depth option",
            PickupUrgency::Avoid => "Avoid - Better options available",
        }
    }
}

impl Serialize for PickupUrgency {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaiverInputs {
    pub expert_confidence: f64,
    /// Yahoo plus Sleeper projection
    pub total_projection: f64,
    pub owned_pct: f64,
    pub trending_count: u32,
    /// Position scarcity score (0-10)
    pub position_scarcity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaiverScore {
    /// Unrounded priority
    pub priority: f64,
    pub scarcity_bonus: f64,
    pub urgency_threshold: f64,
    pub urgency: PickupUrgency,
}

impl WaiverScore {
    /// Priority as reported, one decimal.
    pub fn reported(&self) -> f64 {
        round1(self.priority)
    }
}

pub fn waiver_priority(inputs: &WaiverInputs) -> WaiverScore {
    let confidence_score = inputs.expert_confidence * EXPERT_CONFIDENCE_WEIGHT;
    let projection_score = (inputs.total_projection * PROJECTION_MULTIPLIER).min(PROJECTION_CAP);
    let ownership_bonus = ((OWNERSHIP_PIVOT - inputs.owned_pct) * OWNERSHIP_RATE).max(0.0);
    let trending_bonus = (f64::from(inputs.trending_count) * TRENDING_MULTIPLIER).min(TRENDING_CAP);
    let scarcity_bonus = (inputs.position_scarcity * SCARCITY_MULTIPLIER).min(SCARCITY_CAP);

    let priority =
        confidence_score + projection_score + ownership_bonus + trending_bonus + scarcity_bonus;
    let urgency_threshold = priority + URGENCY_SCARCITY_FACTOR * scarcity_bonus;

    WaiverScore {
        priority,
        scarcity_bonus,
        urgency_threshold,
        urgency: PickupUrgency::from_threshold(urgency_threshold),
    }
}

/// Free-agent value: projection discounted by ownership, zero on bye.
pub fn free_agent_value(total_projection: f64, owned_pct: f64, on_bye: bool) -> f64 {
    if on_bye {
        return 0.0;
    }
    round1(total_projection * (1.0 - owned_pct / 100.0))
}
