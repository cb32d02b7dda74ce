//! Expert-style advice derived from Sleeper projections.

use crate::core::json::round1;
use crate::sleeper::types::{ExpertAdvice, SleeperPlayer};

pub const ELITE_THRESHOLD: f64 = 18.0;
pub const STARTER_THRESHOLD: f64 = 12.0;
pub const FLEX_THRESHOLD: f64 = 8.0;

const BASE_CONFIDENCE: f64 = 40.0;
const CONFIDENCE_PER_POINT: f64 = 2.5;
const MAX_CONFIDENCE: f64 = 95.0;
const NO_PROJECTION_CONFIDENCE: f64 = 30.0;

pub fn tier_for(points: f64) -> &'static str {
    if points >= ELITE_THRESHOLD {
        "Elite"
    } else if points >= STARTER_THRESHOLD {
        "Starter"
    } else if points >= FLEX_THRESHOLD {
        "Flex"
    } else {
        "Depth"
    }
}

fn recommendation_for(tier: &str) -> &'static str {
    match tier {
        "Elite" => "Must Start",
        "Starter" => "Start",
        "Flex" => "Flex",
        _ => "Bench",
    }
}

/// Confidence lost for an injury designation.
pub fn injury_penalty(status: Option<&str>) -> f64 {
    match status.map(|s| s.trim().to_ascii_uppercase()).as_deref() {
        Some("Q") | Some("QUESTIONABLE") => 10.0,
        Some("D") | Some("DOUBTFUL") => 25.0,
        Some("O") | Some("OUT") | Some("IR") | Some("PUP") | Some("SUSP") | Some("NA") => 40.0,
        _ => 0.0,
    }
}

/// Build advice for one player from its projected points.
pub fn advice_for(player: &SleeperPlayer, projected: Option<f64>) -> ExpertAdvice {
    let penalty = injury_penalty(player.injury_status.as_deref());

    let Some(points) = projected else {
        return ExpertAdvice {
            tier: "Depth".to_string(),
            recommendation: "Monitor".to_string(),
            confidence: (NO_PROJECTION_CONFIDENCE - penalty).max(0.0),
            advice: "No Sleeper projection available this week".to_string(),
        };
    };

    let tier = tier_for(points);
    let confidence = ((BASE_CONFIDENCE + CONFIDENCE_PER_POINT * points).min(MAX_CONFIDENCE)
        - penalty)
        .clamp(0.0, MAX_CONFIDENCE);

    let mut advice = format!("Projected {:.1} pts, {} tier", points, tier.to_lowercase());
    if let Some(status) = player.injury_status.as_deref().filter(|_| penalty > 0.0) {
        advice.push_str(&format!("; injury status {} lowers confidence", status));
    }

    ExpertAdvice {
        tier: tier.to_string(),
        recommendation: recommendation_for(tier).to_string(),
        confidence: round1(confidence),
        advice,
    }
}
