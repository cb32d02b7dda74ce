//! Tests for the waiver-wire handler

use super::*;
use crate::scoring::PickupUrgency;
use crate::testing::{
    sleeper_player, trending_player, yahoo_player_entry, yahoo_players_payload, FakePrimary,
    FakeSecondary,
};
use serde_json::json;

fn args(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap_or_default()
}

fn waiver_wire(entries: Vec<Value>) -> FakePrimary {
    FakePrimary::new().with_response("/percent_owned", yahoo_players_payload(entries))
}

/// Jefferson projects 16 (confidence 80), is 10% owned and trending with 4 adds.
fn jefferson_sleeper() -> FakeSecondary {
    let mut fake = FakeSecondary {
        players: vec![
            sleeper_player("300", "Justin Jefferson", "WR", "MIN"),
            sleeper_player("400", "Jake Ferguson", "TE", "DAL"),
        ],
        trending: Some(vec![trending_player("300", "justin jefferson", "WR", 4)]),
        ..Default::default()
    };
    fake.projections
        .insert(6, json!({"300": {"pts_ppr": 16.0}, "400": {"pts_ppr": 6.0}}));
    fake
}

fn jefferson_wire() -> FakePrimary {
    waiver_wire(vec![
        yahoo_player_entry("nfl.p.1", "Jake Ferguson", "DAL", "TE", 45.0),
        yahoo_player_entry("nfl.p.2", "Justin Jefferson", "MIN", "WR", 10.0),
    ])
}

#[cfg(test)]
mod basic_tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_wire_message() {
        let primary = waiver_wire(vec![]);
        let ctx = ToolContext::new(&primary, None);

        let response = handle_get_waiver_wire(&ctx, &args(json!({"league_key": "nfl.l.777"})))
            .await
            .unwrap();

        assert_eq!(response.message.as_deref(), Some(NO_PLAYERS_MESSAGE));
        assert_eq!(response.total_players, 0);
        assert!(response.players.is_empty());
        assert_eq!(response.sort.as_deref(), Some("rank"));
    }

    #[tokio::test]
    async fn test_defaults_in_resource() {
        let primary = jefferson_wire();
        let ctx = ToolContext::new(&primary, None);

        let response = handle_get_waiver_wire(
            &ctx,
            &args(json!({"league_key": "nfl.l.777", "count": "many", "sort": "adp"})),
        )
        .await
        .unwrap();

        assert_eq!(response.position, "all");
        assert_eq!(response.sort.as_deref(), Some("rank"));
        let call = &primary.calls()[0];
        assert!(call.contains(";sort=OR;count=30/percent_owned"));
        assert!(!call.contains(";position="));
    }

    #[tokio::test]
    async fn test_missing_league_key() {
        let primary = jefferson_wire();
        let ctx = ToolContext::new(&primary, None);

        let err = handle_get_waiver_wire(&ctx, &args(json!({"count": 5})))
            .await
            .unwrap_err();
        assert_eq!(err.error, "missing_league_key");
        assert!(primary.calls().is_empty());
    }
}

#[cfg(test)]
mod enhanced_tests {
    use super::*;

    #[tokio::test]
    async fn test_priority_reference_example() {
        let primary = jefferson_wire();
        let secondary = jefferson_sleeper();
        let ctx = ToolContext::new(&primary, Some(&secondary));

        let response = handle_get_waiver_wire(
            &ctx,
            &args(json!({"league_key": "nfl.l.777", "include_analysis": true})),
        )
        .await
        .unwrap();
        let enhanced = response.enhanced_players.unwrap();
        let jj = &enhanced[0];

        // 28 + 30 + 16 + 6 + 0.5
        assert_eq!(jj.name, "Justin Jefferson");
        assert_eq!(jj.expert_confidence, Some(80.0));
        assert_eq!(jj.trending_count, Some(4));
        assert_eq!(jj.trending_position.as_deref(), Some("WR"));
        assert_eq!(jj.waiver_priority, Some(80.5));
        assert_eq!(jj.pickup_urgency, Some(PickupUrgency::MustAdd));
        assert_eq!(jj.position_context.unwrap().scarcity_score, 1.0);
        assert_eq!(
            jj.analysis.as_deref(),
            Some("Starter tier player with 80% confidence. Recommendation: Start. Priority: 80.5/100 (proj: 16.0, owned: 10.0%, trending: 4)")
        );

        let context = response.analysis_context.unwrap();
        assert_eq!(context.trending_count, 1);
        assert_eq!(context.includes.expert_advice, Some(true));
        assert!(context.algorithm.is_some());
        assert_eq!(context.position_scarcity.unwrap()["TE"].avg_ownership, 45.0);
    }

    #[tokio::test]
    async fn test_scarcity_note_in_analysis() {
        let primary = waiver_wire(vec![yahoo_player_entry(
            "nfl.p.1",
            "Jake Ferguson",
            "DAL",
            "TE",
            80.0,
        )]);
        let secondary = jefferson_sleeper();
        let ctx = ToolContext::new(&primary, Some(&secondary));

        let response = handle_get_waiver_wire(
            &ctx,
            &args(json!({"league_key": "nfl.l.777", "include_analysis": true})),
        )
        .await
        .unwrap();
        let analysis = response.enhanced_players.unwrap()[0].analysis.clone().unwrap();

        assert!(analysis.ends_with(" HIGH SCARCITY at TE!"));
    }

    #[tokio::test]
    async fn test_no_analysis_omits_scoring() {
        let primary = jefferson_wire();
        let secondary = jefferson_sleeper();
        let ctx = ToolContext::new(&primary, Some(&secondary));

        let response = handle_get_waiver_wire(&ctx, &args(json!({"league_key": "nfl.l.777"})))
            .await
            .unwrap();
        let json = serde_json::to_value(&response).unwrap();
        let first = &json["enhanced_players"][0];

        // Projection sort: 16 before 6
        assert_eq!(first["name"], "Justin Jefferson");
        assert_eq!(first["trending_count"], 4);
        let ferguson = &json["enhanced_players"][1];
        assert_eq!(ferguson["name"], "Jake Ferguson");
        assert!(ferguson.get("trending_count").is_none());
        assert!(ferguson.get("trending_position").is_none());
        for key in ["waiver_priority", "pickup_urgency", "expert_tier", "position_context"] {
            assert!(first.get(key).is_none(), "{key} should be omitted");
        }
        assert!(json["analysis_context"].get("algorithm").is_none());
        assert!(json["analysis_context"].get("position_scarcity").is_none());
        assert_eq!(json["analysis_context"]["week"], "current");
        assert_eq!(json["total_players"], 2);
    }

    #[tokio::test]
    async fn test_unmapped_player_gets_default_advice() {
        let primary = waiver_wire(vec![yahoo_player_entry(
            "nfl.p.9",
            "Nobody Special",
            "FA",
            "RB",
            0.0,
        )]);
        let secondary = jefferson_sleeper();
        let ctx = ToolContext::new(&primary, Some(&secondary));

        let response = handle_get_waiver_wire(
            &ctx,
            &args(json!({"league_key": "nfl.l.777", "include_analysis": true})),
        )
        .await
        .unwrap();
        let enhanced = response.enhanced_players.unwrap();
        let player = &enhanced[0];

        assert_eq!(player.expert_tier.as_deref(), Some("Depth"));
        assert_eq!(player.expert_confidence, Some(50.0));
        assert!(response.warnings.iter().any(|w| w.contains("Nobody Special")));
    }
}
