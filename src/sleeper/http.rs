//! Sleeper API client and the secondary-provider capability.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info};

use crate::{
    config::Config,
    core::{
        cache::{
            epoch_day, PlayerDirectoryCacheKey, WeeklyPayloadCacheKey, WeeklyPayloadKind,
        },
        http::build_client,
        json::parse_int,
        UnifiedCache,
    },
    error::FflError,
    sleeper::{
        advice::advice_for,
        directory::PlayerDirectory,
        points::{player_row, projection_points},
        types::{ExpertAdvice, NflState, PlayerMatch, SleeperPlayer, TrendingPlayer},
    },
    Result, Season, Week,
};


const DIRECTORY_MEMORY_CAPACITY: usize = 2;
const WEEKLY_MEMORY_CAPACITY: usize = 64;
const TRENDING_LOOKBACK_HOURS: u32 = 24;

/// Capability to query the secondary provider.
///
/// Implementors supply the raw endpoints; player mapping and expert advice
/// are built on top of them.
#[async_trait]
pub trait SecondaryProvider: Send + Sync {
    async fn nfl_state(&self) -> Result<NflState>;

    async fn player_directory(&self) -> Result<Arc<PlayerDirectory>>;

    /// Most-added players over the last day, resolved to names.
    async fn trending_adds(&self, limit: usize) -> Result<Vec<TrendingPlayer>>;

    /// Per-player actual stats for one week, keyed by Sleeper id.
    async fn weekly_stats(&self, season: Season, week: Week) -> Result<Value>;

    /// Per-player projections for one week, keyed by Sleeper id.
    async fn weekly_projections(&self, season: Season, week: Week) -> Result<Value>;

    async fn map_player(
        &self,
        name: &str,
        position: Option<&str>,
        team: Option<&str>,
    ) -> Result<Option<PlayerMatch>> {
        Ok(self.player_directory().await?.find(name, position, team))
    }

    /// Tier, recommendation and confidence for a player by name.
    ///
    /// `week = None` means the current NFL week.
    async fn expert_advice(&self, name: &str, week: Option<Week>) -> Result<ExpertAdvice> {
        let matched = self
            .map_player(name, None, None)
            .await?
            .ok_or_else(|| FflError::PlayerNotFound {
                name: name.to_string(),
            })?;
        let state = self.nfl_state().await?;
        let week = week.unwrap_or_else(|| state.week());

        let projections = self.weekly_projections(state.season(), week).await?;
        let points = player_row(&projections, &matched.sleeper_id).and_then(projection_points);
        Ok(advice_for(&matched.player, points))
    }
}

pub struct SleeperClient {
    client: Client,
    base_url: String,
    directory_cache: UnifiedCache<PlayerDirectoryCacheKey, Vec<SleeperPlayer>>,
    directory: Mutex<Option<Arc<PlayerDirectory>>>,
    weekly_cache: UnifiedCache<WeeklyPayloadCacheKey, Value>,
    state: Mutex<Option<NflState>>,
}

impl SleeperClient {
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = build_client(config.http_timeout)?;
        Ok(Self::with_client(
            client,
            &config.sleeper_base_url,
            config.cache_dir.clone(),
        ))
    }

    /// Client against `base_url` with an optional disk cache root.
    pub fn with_base_url(base_url: &str, cache_dir: Option<std::path::PathBuf>) -> Result<Self> {
        let client = build_client(Duration::from_secs(30))?;
        Ok(Self::with_client(client, base_url, cache_dir))
    }

    fn with_client(client: Client, base_url: &str, cache_dir: Option<std::path::PathBuf>) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            directory_cache: UnifiedCache::new(DIRECTORY_MEMORY_CAPACITY, cache_dir.clone()),
            directory: Mutex::new(None),
            weekly_cache: UnifiedCache::new(WEEKLY_MEMORY_CAPACITY, cache_dir),
            state: Mutex::new(None),
        }
    }

    fn cached_state(&self) -> Option<NflState> {
        self.state.lock().ok().and_then(|guard| guard.clone())
    }

    fn cached_directory(&self) -> Option<Arc<PlayerDirectory>> {
        self.directory.lock().ok().and_then(|guard| guard.clone())
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        debug!(%url, "sleeper request");

        let v = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await?;
        Ok(v)
    }

    /// Whether a week is finished relative to the current NFL state.
    async fn is_completed_week(&self, season: Season, week: Week) -> bool {
        match self.nfl_state().await {
            Ok(state) => {
                season < state.season() || (season == state.season() && week < state.week())
            }
            Err(_) => false,
        }
    }

    async fn weekly_payload(
        &self,
        season: Season,
        week: Week,
        kind: WeeklyPayloadKind,
    ) -> Result<Value> {
        let key = WeeklyPayloadCacheKey { season, week, kind };
        if let Some(cached) = self.weekly_cache.get(&key) {
            debug!(?kind, %season, %week, "sleeper weekly payload cache hit");
            return Ok(cached);
        }

        let segment = match kind {
            WeeklyPayloadKind::Stats => "stats",
            WeeklyPayloadKind::Projections => "projections",
        };
        let payload: Value = self
            .get_json(&format!("{}/nfl/regular/{}/{}", segment, season, week))
            .await?;

        // Stats and projections for open weeks keep changing
        if self.is_completed_week(season, week).await {
            self.weekly_cache.put(key, payload.clone());
        } else {
            self.weekly_cache.put_memory(key, payload.clone());
        }
        Ok(payload)
    }
}

fn store<T>(slot: &Mutex<Option<T>>, value: T) {
    if let Ok(mut guard) = slot.lock() {
        *guard = Some(value);
    }
}

fn directory_from_payload(payload: Value) -> Vec<SleeperPlayer> {
    let Value::Object(map) = payload else {
        return Vec::new();
    };
    map.into_iter()
        .filter_map(|(id, mut entry)| {
            if let Value::Object(obj) = &mut entry {
                obj.entry("player_id").or_insert(Value::String(id));
            }
            serde_json::from_value::<SleeperPlayer>(entry).ok()
        })
        .collect()
}

#[async_trait]
impl SecondaryProvider for SleeperClient {
    async fn nfl_state(&self) -> Result<NflState> {
        if let Some(state) = self.cached_state() {
            return Ok(state);
        }

        let state: NflState = self.get_json("state/nfl").await?;
        info!(season = %state.season(), week = %state.week(), "sleeper nfl state");
        store(&self.state, state.clone());
        Ok(state)
    }

    async fn player_directory(&self) -> Result<Arc<PlayerDirectory>> {
        if let Some(directory) = self.cached_directory() {
            return Ok(directory);
        }

        let key = PlayerDirectoryCacheKey {
            epoch_day: epoch_day(),
        };
        let players = match self.directory_cache.get(&key) {
            Some(players) => players,
            None => {
                let payload: Value = self.get_json("players/nfl").await?;
                let players = directory_from_payload(payload);
                info!(count = players.len(), "fetched sleeper player directory");
                self.directory_cache.put(key, players.clone());
                players
            }
        };

        let directory = Arc::new(PlayerDirectory::new(players));
        store(&self.directory, Arc::clone(&directory));
        Ok(directory)
    }

    async fn trending_adds(&self, limit: usize) -> Result<Vec<TrendingPlayer>> {
        let raw: Vec<Value> = self
            .get_json(&format!(
                "players/nfl/trending/add?lookback_hours={}&limit={}",
                TRENDING_LOOKBACK_HOURS, limit
            ))
            .await?;
        let directory = self.player_directory().await?;

        let trending = raw
            .iter()
            .filter_map(|row| {
                let id = row.get("player_id")?.as_str()?;
                let count = row
                    .get("count")
                    .and_then(parse_int)
                    .and_then(|c| u32::try_from(c).ok())
                    .unwrap_or(0);
                let player = directory.get(id)?;
                Some(TrendingPlayer {
                    player_id: id.to_string(),
                    name: player.display_name(),
                    position: player.position.clone(),
                    team: player.team.clone(),
                    count,
                })
            })
            .collect::<Vec<_>>();
        debug!(count = trending.len(), "sleeper trending adds");
        Ok(trending)
    }

    async fn weekly_stats(&self, season: Season, week: Week) -> Result<Value> {
        self.weekly_payload(season, week, WeeklyPayloadKind::Stats)
            .await
    }

    async fn weekly_projections(&self, season: Season, week: Week) -> Result<Value> {
        self.weekly_payload(season, week, WeeklyPayloadKind::Projections)
            .await
    }
}
