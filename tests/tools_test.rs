//! End-to-end tool tests against mocked Yahoo and Sleeper APIs

use serde_json::{json, Map, Value};
use wiremock::{
    matchers::{method, path, path_regex},
    Mock, MockServer, ResponseTemplate,
};
use yahoo_ffl::{
    commands::{dispatch, ToolContext},
    sleeper::{SecondaryProvider, SleeperClient},
    yahoo::YahooClient,
};

fn args(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap_or_default()
}

fn player_entry(key: &str, name: &str, team: &str, position: &str, owned: f64) -> Value {
    json!({"player": [[
        {"player_key": key},
        {"player_id": key.rsplit('.').next().unwrap_or(key)},
        {"name": {"full": name}},
        {"editorial_team_abbr": team},
        {"display_position": position}
    ], {"percent_owned": {"value": owned, "delta": "2"}}]})
}

fn players_payload(entries: Vec<Value>) -> Value {
    let mut players = Map::new();
    let count = entries.len();
    for (i, entry) in entries.into_iter().enumerate() {
        players.insert(i.to_string(), entry);
    }
    players.insert("count".to_string(), json!(count));
    json!({"fantasy_content": {"league": [{"league_key": "nfl.l.777"}, {"players": players}]}})
}

async fn yahoo_server() -> MockServer {
    let server = MockServer::start().await;
    let wire = players_payload(vec![
        player_entry("nfl.p.1", "Jake Ferguson", "DAL", "TE", 45.0),
        player_entry("nfl.p.2", "Justin Jefferson", "MIN", "WR", 10.0),
    ]);

    Mock::given(method("GET"))
        .and(path(
            "/league/nfl.l.777/players;status=A;sort=OR;count=30/percent_owned",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(wire.clone()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/league/nfl.l.777/players;status=A;count=10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(wire))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/league/nfl.l.777/players;player_keys=nfl.p.2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(players_payload(vec![
            player_entry("nfl.p.2", "Justin Jefferson", "MIN", "WR", 10.0),
        ])))
        .mount(&server)
        .await;
    server
}

async fn sleeper_server() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/state/nfl"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            json!({"season": "2025", "week": 6, "season_type": "regular"}),
        ))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/players/nfl"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "6794": {"full_name": "Justin Jefferson", "position": "WR", "team": "MIN", "search_rank": 3},
            "7045": {"full_name": "Jake Ferguson", "position": "TE", "team": "DAL", "search_rank": 140}
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/players/nfl/trending/add"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{"player_id": "6794", "count": 4}])),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/projections/nfl/regular/2025/6"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "6794": {"pts_ppr": 16.0, "opponent": "DET"},
            "7045": {"pts_ppr": 6.0}
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/stats/nfl/regular/2025/\d+$"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"6794": {"pts_ppr": 21.5}})),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/projections/nfl/regular/2025/[1-5]$"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"6794": {"pts_ppr": 17.0}})),
        )
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_waiver_wire_end_to_end_priority() {
    let yahoo_mock = yahoo_server().await;
    let sleeper_mock = sleeper_server().await;
    let yahoo = YahooClient::with_base_url(&yahoo_mock.uri(), Some("token")).unwrap();
    let sleeper = SleeperClient::with_base_url(&sleeper_mock.uri(), None).unwrap();
    let ctx = ToolContext::new(&yahoo, Some(&sleeper as &dyn SecondaryProvider));

    let out = dispatch(
        &ctx,
        "get-waiver-wire",
        &args(json!({"league_key": "nfl.l.777", "include_analysis": true})),
    )
    .await;

    assert_eq!(out["status"], "success");
    assert_eq!(out["total_players"], 2);
    assert_eq!(out["sort"], "rank");

    let jj = &out["enhanced_players"][0];
    assert_eq!(jj["name"], "Justin Jefferson");
    assert_eq!(jj["sleeper_id"], "6794");
    assert_eq!(jj["opponent"], "DET");
    assert_eq!(jj["trending_count"], 4);
    assert_eq!(jj["expert_confidence"], 80.0);
    assert_eq!(jj["waiver_priority"], 80.5);
    assert_eq!(jj["pickup_urgency"], "MUST ADD - Elite waiver target");
    assert_eq!(jj["weekly_change"], 2.0);

    let context = &out["analysis_context"];
    assert_eq!(context["trending_count"], 1);
    assert_eq!(context["includes"]["expert_advice"], true);
    assert_eq!(
        context["algorithm"]["waiver_priority_weights"]["expert_confidence"],
        "35%"
    );
    assert_eq!(context["position_scarcity"]["WR"]["scarcity_score"], 1.0);
    assert!(out.get("warnings").is_none());
}

#[tokio::test]
async fn test_players_without_analysis_has_no_gated_keys() {
    let yahoo_mock = yahoo_server().await;
    let sleeper_mock = sleeper_server().await;
    let yahoo = YahooClient::with_base_url(&yahoo_mock.uri(), Some("token")).unwrap();
    let sleeper = SleeperClient::with_base_url(&sleeper_mock.uri(), None).unwrap();
    let ctx = ToolContext::new(&yahoo, Some(&sleeper as &dyn SecondaryProvider));

    let out = dispatch(&ctx, "ff_get_players", &args(json!({"league_key": "nfl.l.777"}))).await;

    let players = out["players"].as_array().unwrap();
    assert_eq!(out["total_players"], players.len());

    let enhanced = out["enhanced_players"].as_array().unwrap();
    assert_eq!(enhanced[0]["name"], "Justin Jefferson");
    for player in enhanced {
        for key in ["free_agent_value", "analysis", "waiver_priority", "expert_tier"] {
            assert!(player.get(key).is_none(), "{key} should be omitted");
        }
    }
    assert_eq!(out["analysis_context"]["week"], "current");
}

#[tokio::test]
async fn test_missing_league_key_makes_no_requests() {
    let yahoo_mock = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&yahoo_mock)
        .await;
    let yahoo = YahooClient::with_base_url(&yahoo_mock.uri(), Some("token")).unwrap();
    let ctx = ToolContext::new(&yahoo, None);

    for tool in ["get-players", "get-waiver-wire"] {
        let out = dispatch(&ctx, tool, &args(json!({"count": 5}))).await;
        assert_eq!(out["status"], "error");
        assert_eq!(out["error"], "missing_league_key");
    }
}

#[tokio::test]
async fn test_sleeper_disabled_degrades_to_yahoo_only() {
    let yahoo_mock = yahoo_server().await;
    let yahoo = YahooClient::with_base_url(&yahoo_mock.uri(), Some("token")).unwrap();
    let ctx = ToolContext::new(&yahoo, None).with_unavailable_reason("disabled for test");

    let out = dispatch(
        &ctx,
        "get-waiver-wire",
        &args(json!({"league_key": "nfl.l.777", "include_analysis": true})),
    )
    .await;

    assert_eq!(out["status"], "success");
    assert_eq!(out["note"], "Enhanced data unavailable: disabled for test");
    assert!(out.get("enhanced_players").is_none());
    assert_eq!(out["players"][1]["name"], "Justin Jefferson");
}

#[tokio::test]
async fn test_weekly_points_end_to_end() {
    let yahoo_mock = yahoo_server().await;
    let sleeper_mock = sleeper_server().await;
    let yahoo = YahooClient::with_base_url(&yahoo_mock.uri(), Some("token")).unwrap();
    let sleeper = SleeperClient::with_base_url(&sleeper_mock.uri(), None).unwrap();
    let ctx = ToolContext::new(&yahoo, Some(&sleeper as &dyn SecondaryProvider));

    let out = dispatch(
        &ctx,
        "get-player-weekly-points",
        &args(json!({"league_id": "nfl.l.777", "player_id": "2", "start_week": 4})),
    )
    .await;

    assert_eq!(out["status"], "success");
    assert_eq!(out["player_key"], "nfl.p.2");
    assert_eq!(out["yahoo_player_id"], "2");
    assert_eq!(out["sleeper_id"], "6794");
    assert_eq!(out["season"], 2025);
    assert_eq!(out["start_week"], 4);
    assert_eq!(out["end_week"], 6);

    let weeks = out["weeks"].as_array().unwrap();
    assert_eq!(weeks.len(), 3);
    assert_eq!(weeks[0], json!({"week_number": 4, "earned_points": 21.5, "sleeper_projected_points": 17.0}));
    assert_eq!(weeks[2]["sleeper_projected_points"], 16.0);
}

#[tokio::test]
async fn test_unknown_tool() {
    let yahoo = YahooClient::with_base_url("http://127.0.0.1:9", Some("token")).unwrap();
    let ctx = ToolContext::new(&yahoo, None);

    let out = dispatch(&ctx, "get-standings", &Map::new()).await;
    assert_eq!(out["error"], "unknown_tool");
    assert_eq!(out["message"], "Unknown tool: get-standings");
}
