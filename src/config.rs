//! Runtime configuration read from the environment.

use std::path::PathBuf;
use std::time::Duration;

use crate::core::cache::default_cache_root;

pub const ACCESS_TOKEN_ENV_VAR: &str = "YAHOO_ACCESS_TOKEN";
pub const LEAGUE_KEY_ENV_VAR: &str = "YAHOO_FFL_LEAGUE_KEY";
pub const YAHOO_BASE_URL_ENV_VAR: &str = "YAHOO_API_BASE_URL";
pub const SLEEPER_BASE_URL_ENV_VAR: &str = "SLEEPER_API_BASE_URL";
pub const SLEEPER_DISABLED_ENV_VAR: &str = "FFL_SLEEPER_DISABLED";
pub const CACHE_DIR_ENV_VAR: &str = "FFL_CACHE_DIR";
pub const HTTP_TIMEOUT_ENV_VAR: &str = "FFL_HTTP_TIMEOUT_SECS";

pub const DEFAULT_YAHOO_BASE_URL: &str = "https://fantasysports.yahooapis.com/fantasy/v2";
pub const DEFAULT_SLEEPER_BASE_URL: &str = "https://api.sleeper.app/v1";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub yahoo_base_url: String,
    pub access_token: Option<String>,
    pub default_league_key: Option<String>,
    pub sleeper_base_url: String,
    pub sleeper_enabled: bool,
    /// Disk cache root; `None` keeps the cache in memory only.
    pub cache_dir: Option<PathBuf>,
    pub http_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            yahoo_base_url: DEFAULT_YAHOO_BASE_URL.to_string(),
            access_token: None,
            default_league_key: None,
            sleeper_base_url: DEFAULT_SLEEPER_BASE_URL.to_string(),
            sleeper_enabled: true,
            cache_dir: Some(default_cache_root()),
            http_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            yahoo_base_url: get(YAHOO_BASE_URL_ENV_VAR)
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.yahoo_base_url),
            access_token: get(ACCESS_TOKEN_ENV_VAR),
            default_league_key: get(LEAGUE_KEY_ENV_VAR),
            sleeper_base_url: get(SLEEPER_BASE_URL_ENV_VAR)
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.sleeper_base_url),
            sleeper_enabled: !get(SLEEPER_DISABLED_ENV_VAR)
                .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
            cache_dir: get(CACHE_DIR_ENV_VAR)
                .map(PathBuf::from)
                .or(defaults.cache_dir),
            http_timeout: get(HTTP_TIMEOUT_ENV_VAR)
                .and_then(|v| v.trim().parse::<u64>().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.http_timeout),
        }
    }
}
