//! Fantasy football position types and utilities.

use crate::error::FflError;
use std::fmt;
use std::str::FromStr;

/// Fantasy football player positions as Yahoo filters them.
///
/// # Position Types
///
/// - **Individual positions**: QB, RB, WR, TE, K, DEF
/// - **Flexible positions**: FLEX (Yahoo's `W/R/T` slot)
///
/// # Examples
///
/// ```rust
/// use yahoo_ffl::Position;
///
/// let def: Position = "D/ST".parse().unwrap();
/// assert_eq!(def, Position::DEF);
/// assert_eq!(Position::FLEX.yahoo_code(), "W/R/T");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
    K,
    DEF,
    FLEX,
}

impl Position {
    /// Position code used in Yahoo collection filters (`;position=...`).
    pub fn yahoo_code(&self) -> &'static str {
        match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::K => "K",
            Position::DEF => "DEF",
            Position::FLEX => "W/R/T",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::K => "K",
            Position::DEF => "DEF",
            Position::FLEX => "FLEX",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Position {
    type Err = FflError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "QB" => Ok(Position::QB),
            "RB" => Ok(Position::RB),
            "WR" => Ok(Position::WR),
            "TE" => Ok(Position::TE),
            "K" => Ok(Position::K),
            "DEF" | "D/ST" | "DST" => Ok(Position::DEF),
            "FLEX" | "W/R/T" => Ok(Position::FLEX),
            _ => Err(FflError::InvalidPosition {
                position: s.to_string(),
            }),
        }
    }
}
