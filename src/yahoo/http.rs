//! Yahoo Fantasy API client and the resource calls the tools make.

use async_trait::async_trait;
use reqwest::{header::HeaderMap, Client};
use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    cli::types::{LeagueKey, PlayerKey, WaiverSort},
    config::{Config, ACCESS_TOKEN_ENV_VAR},
    core::http::{build_client, yahoo_header_map},
    error::FflError,
    yahoo::{
        extract::{extract_basic_players, extract_leagues, extract_player_info},
        types::{BasicPlayer, LeagueRef, YahooPlayerInfo},
    },
    Result,
};


/// Capability to call the primary provider.
///
/// `resource` is a Yahoo Fantasy v2 resource path such as
/// `league/nfl.l.1/players;status=A;count=10`.
#[async_trait]
pub trait PrimaryProvider: Send + Sync {
    async fn api_call(&self, resource: &str) -> Result<Value>;
}

pub struct YahooClient {
    client: Client,
    base_url: String,
    headers: HeaderMap,
    has_token: bool,
}

impl YahooClient {
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = build_client(config.http_timeout)?;
        Self::with_client(client, &config.yahoo_base_url, config.access_token.as_deref())
    }

    pub fn with_base_url(base_url: &str, access_token: Option<&str>) -> Result<Self> {
        let client = build_client(std::time::Duration::from_secs(30))?;
        Self::with_client(client, base_url, access_token)
    }

    fn with_client(client: Client, base_url: &str, access_token: Option<&str>) -> Result<Self> {
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            headers: yahoo_header_map(access_token)?,
            has_token: access_token.is_some(),
        })
    }
}

#[async_trait]
impl PrimaryProvider for YahooClient {
    async fn api_call(&self, resource: &str) -> Result<Value> {
        if !self.has_token {
            return Err(FflError::MissingCredentials {
                env_var: ACCESS_TOKEN_ENV_VAR.to_string(),
            });
        }
        let url = format!("{}/{}", self.base_url, resource.trim_start_matches('/'));
        debug!(%url, "yahoo request");

        let v = self
            .client
            .get(&url)
            .headers(self.headers.clone())
            .query(&[("format", "json")])
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;
        Ok(v)
    }
}

/// `league/{key}/players;status=A[;position=P];count=N`
pub fn available_players_resource(
    league_key: &LeagueKey,
    position: Option<&str>,
    count: usize,
) -> String {
    let pos_filter = position
        .map(|p| format!(";position={}", p))
        .unwrap_or_default();
    format!(
        "league/{}/players;status=A{};count={}",
        league_key, pos_filter, count
    )
}

/// Waiver-wire listing with ownership percentages and weekly deltas.
pub fn waiver_players_resource(
    league_key: &LeagueKey,
    position: Option<&str>,
    sort: WaiverSort,
    count: usize,
) -> String {
    let pos_filter = position
        .map(|p| format!(";position={}", p))
        .unwrap_or_default();
    format!(
        "league/{}/players;status=A{};sort={};count={}/percent_owned",
        league_key,
        pos_filter,
        sort.yahoo_sort_param(),
        count
    )
}

pub fn player_resource(league_key: &LeagueKey, player_key: &PlayerKey) -> String {
    format!("league/{}/players;player_keys={}", league_key, player_key)
}

pub const USER_LEAGUES_RESOURCE: &str = "users;use_login=1/games;game_keys=nfl/leagues";

pub async fn fetch_available_players(
    provider: &dyn PrimaryProvider,
    league_key: &LeagueKey,
    position: Option<&str>,
    count: usize,
) -> Result<Vec<BasicPlayer>> {
    let data = provider
        .api_call(&available_players_resource(league_key, position, count))
        .await?;
    Ok(extract_basic_players(&data))
}

pub async fn fetch_waiver_wire_players(
    provider: &dyn PrimaryProvider,
    league_key: &LeagueKey,
    position: Option<&str>,
    sort: WaiverSort,
    count: usize,
) -> Result<Vec<BasicPlayer>> {
    let data = provider
        .api_call(&waiver_players_resource(league_key, position, sort, count))
        .await?;
    let mut players = extract_basic_players(&data);

    if sort.sorts_locally() {
        players.sort_by(|a, b| {
            b.weekly_change
                .unwrap_or(0.0)
                .partial_cmp(&a.weekly_change.unwrap_or(0.0))
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    }
    Ok(players)
}

pub async fn fetch_player_info(
    provider: &dyn PrimaryProvider,
    league_key: &LeagueKey,
    player_key: &PlayerKey,
) -> Result<Option<YahooPlayerInfo>> {
    let data = provider
        .api_call(&player_resource(league_key, player_key))
        .await?;
    Ok(extract_player_info(&data, player_key.as_str()))
}

pub async fn discover_leagues(provider: &dyn PrimaryProvider) -> Result<Vec<LeagueRef>> {
    let data = provider.api_call(USER_LEAGUES_RESOURCE).await?;
    Ok(extract_leagues(&data))
}

/// Turn user input into a league key.
///
/// Qualified keys pass through. Otherwise the user's leagues are searched by
/// id or key; failing that, numeric input becomes `nfl.l.<id>`.
pub async fn resolve_league_key(provider: &dyn PrimaryProvider, raw: &str) -> LeagueKey {
    let raw = raw.trim();
    let given = LeagueKey::new(raw);
    if given.is_qualified() {
        return given;
    }

    match discover_leagues(provider).await {
        Ok(leagues) => {
            if let Some(found) = leagues
                .into_iter()
                .find(|l| l.league_id == raw || l.league_key == raw)
            {
                return LeagueKey::new(found.league_key);
            }
        }
        Err(e) => warn!(error = %e, "league discovery failed, using default key format"),
    }

    LeagueKey::from_raw(raw)
}
