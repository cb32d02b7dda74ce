//! ID types for Yahoo Fantasy Football.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FflError;

/// Game code prefix Yahoo uses for NFL keys (`nfl.l.<id>`, `nfl.p.<id>`).
pub const NFL_GAME_CODE: &str = "nfl";

/// Type-safe wrapper for Yahoo league keys.
///
/// A full key looks like `449.l.123456` or `nfl.l.123456`. A bare numeric league
/// id is promoted to `nfl.l.<id>`.
///
/// # Examples
///
/// ```rust
/// use yahoo_ffl::LeagueKey;
///
/// assert_eq!(LeagueKey::from_raw("123456").as_str(), "nfl.l.123456");
/// assert_eq!(LeagueKey::from_raw("449.l.99").as_str(), "449.l.99");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeagueKey(pub String);

impl LeagueKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Normalise user input without any provider lookup.
    pub fn from_raw(raw: &str) -> Self {
        Self(normalize_key(raw, "l"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the key already carries a game prefix.
    pub fn is_qualified(&self) -> bool {
        self.0.contains('.')
    }
}

impl fmt::Display for LeagueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LeagueKey {
    type Err = FflError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(FflError::MissingArgument {
                name: "league_key".to_string(),
            });
        }
        Ok(Self::new(trimmed))
    }
}

/// Type-safe wrapper for Yahoo player keys (`nfl.p.<id>`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerKey(pub String);

impl PlayerKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn from_raw(raw: &str) -> Self {
        Self(normalize_key(raw, "p"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn normalize_key(raw: &str, kind: &str) -> String {
    let raw = raw.trim();
    if raw.contains('.') {
        raw.to_string()
    } else if !raw.is_empty() && raw.chars().all(|c| c.is_ascii_digit()) {
        format!("{NFL_GAME_CODE}.{kind}.{raw}")
    } else {
        raw.to_string()
    }
}
