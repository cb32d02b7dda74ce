//! Time-related types for NFL seasons and weeks.

use crate::error::{FflError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Last week of the fantasy regular season plus playoffs.
pub const MAX_WEEK: u16 = 18;

/// Type-safe wrapper for Season years
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl Default for Season {
    fn default() -> Self {
        Self(2025)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = FflError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Type-safe wrapper for Week numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Week(pub u16);

impl Week {
    pub fn new(week: u16) -> Self {
        Self(week)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Weeks strictly before this one, most recent first, at most `n` of them.
    pub fn previous(&self, n: u16) -> Vec<Week> {
        let first = self.0.saturating_sub(n).max(1);
        (first..self.0).rev().map(Week).collect()
    }
}

impl Default for Week {
    fn default() -> Self {
        Self(1)
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Week {
    type Err = FflError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Inclusive week window for the weekly-points flow.
///
/// `start` defaults to 1 and never drops below it. Without an explicit end the
/// window runs to the current week (never before `start`), capped at
/// [`MAX_WEEK`]. An explicit end is clamped into `[start, MAX_WEEK]`.
pub fn week_window(start: Option<i64>, end: Option<i64>, current_week: Week) -> (Week, Week) {
    let start = start.unwrap_or(1).clamp(1, i64::from(u16::MAX));
    let max = i64::from(MAX_WEEK);
    let end = match end {
        Some(requested) => start.max(requested.min(max)),
        None => i64::from(current_week.as_u16()).max(start).min(max),
    };
    (Week(start as u16), Week(end as u16))
}
