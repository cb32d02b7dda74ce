//! Tests for waiver priority scoring

use super::*;

fn inputs() -> WaiverInputs {
    WaiverInputs {
        expert_confidence: 80.0,
        total_projection: 15.0,
        owned_pct: 10.0,
        trending_count: 4,
        position_scarcity: 1.0,
    }
}

#[cfg(test)]
mod priority_tests {
    use super::*;

    #[test]
    fn test_reference_example() {
        // 28 + 30 + 16 + 6 + 0.5
        let score = waiver_priority(&inputs());
        assert_eq!(score.reported(), 80.5);
        assert!((score.scarcity_bonus - 0.5).abs() < 1e-9);
        assert!((score.urgency_threshold - 81.5).abs() < 1e-9);
        assert_eq!(score.urgency, PickupUrgency::MustAdd);
        assert_eq!(score.urgency.label(), "MUST ADD - Elite waiver target");
    }

    #[test]
    fn test_components_are_capped() {
        let score = waiver_priority(&WaiverInputs {
            expert_confidence: 0.0,
            total_projection: 100.0,
            owned_pct: 100.0,
            trending_count: 1000,
            position_scarcity: 10.0,
        });
        // 30 projection + 0 ownership + 10 trending + 5 scarcity
        assert_eq!(score.reported(), 45.0);
        assert_eq!(score.scarcity_bonus, 5.0);
        assert_eq!(score.urgency_threshold, 55.0);
        assert_eq!(score.urgency, PickupUrgency::Moderate);
    }

    #[test]
    fn test_ownership_bonus_never_negative() {
        let mut high_owned = inputs();
        high_owned.owned_pct = 95.0;
        let mut at_pivot = inputs();
        at_pivot.owned_pct = 50.0;

        assert_eq!(
            waiver_priority(&high_owned).priority,
            waiver_priority(&at_pivot).priority
        );
    }

    #[test]
    fn test_monotonic_in_each_input() {
        let base = waiver_priority(&inputs()).priority;

        let mut more_confident = inputs();
        more_confident.expert_confidence = 90.0;
        assert!(waiver_priority(&more_confident).priority >= base);

        let mut more_projected = inputs();
        more_projected.total_projection = 5.0;
        assert!(waiver_priority(&more_projected).priority <= base);

        let mut more_trending = inputs();
        more_trending.trending_count = 10;
        assert!(waiver_priority(&more_trending).priority >= base);

        let mut more_owned = inputs();
        more_owned.owned_pct = 30.0;
        assert!(waiver_priority(&more_owned).priority <= base);

        // Sweep ownership: never increases as ownership rises
        let mut last = f64::INFINITY;
        for owned in (0..=100).step_by(5) {
            let mut i = inputs();
            i.owned_pct = f64::from(owned);
            let p = waiver_priority(&i).priority;
            assert!(p <= last);
            last = p;
        }
    }
}

#[cfg(test)]
mod urgency_tests {
    use super::*;

    #[test]
    fn test_boundaries_map_to_higher_tier() {
        assert_eq!(PickupUrgency::from_threshold(80.0), PickupUrgency::MustAdd);
        assert_eq!(PickupUrgency::from_threshold(79.99), PickupUrgency::High);
        assert_eq!(PickupUrgency::from_threshold(65.0), PickupUrgency::High);
        assert_eq!(PickupUrgency::from_threshold(50.0), PickupUrgency::Moderate);
        assert_eq!(PickupUrgency::from_threshold(35.0), PickupUrgency::Low);
        assert_eq!(PickupUrgency::from_threshold(34.99), PickupUrgency::Avoid);
    }

    #[test]
    fn test_scarcity_raises_urgency_not_priority_alone() {
        // Doubled scarcity bonus lifts the threshold but stays inside the tier
        let score = waiver_priority(&WaiverInputs {
            expert_confidence: 40.0,
            total_projection: 10.0,
            owned_pct: 35.0,
            trending_count: 0,
            position_scarcity: 4.0,
        });
        // 14 + 20 + 6 + 0 + 2
        assert_eq!(score.reported(), 42.0);
        assert!((score.urgency_threshold - 46.0).abs() < 1e-9);
        assert_eq!(score.urgency, PickupUrgency::Low);
    }

    #[test]
    fn test_urgency_serializes_as_label() {
        let json = serde_json::to_value(PickupUrgency::Avoid).unwrap();
        assert_eq!(json, "Avoid - Better options available");
    }
}

#[cfg(test)]
mod free_agent_value_tests {
    use super::*;

    #[test]
    fn test_free_agent_value() {
        assert_eq!(free_agent_value(20.0, 25.0, false), 15.0);
        assert_eq!(free_agent_value(12.34, 0.0, false), 12.3);
        assert_eq!(free_agent_value(20.0, 100.0, false), 0.0);
    }

    #[test]
    fn test_free_agent_value_on_bye() {
        assert_eq!(free_agent_value(25.0, 5.0, true), 0.0);
    }
}
