//! Filter and sort types for the waiver-wire tool.

use std::fmt;

/// Sort order for waiver-wire candidates.
///
/// Unknown values fall back to [`WaiverSort::Rank`] rather than failing the
/// request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum WaiverSort {
    /// Yahoo overall rank
    #[default]
    Rank,
    /// Fantasy points
    Points,
    /// Percent owned
    Owned,
    /// Ownership gain this week (sorted locally)
    Trending,
}

impl WaiverSort {
    /// Lenient parse used by the tool layer.
    pub fn parse_or_default(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_lowercase()).as_deref() {
            Some("points") => WaiverSort::Points,
            Some("owned") => WaiverSort::Owned,
            Some("trending") => WaiverSort::Trending,
            _ => WaiverSort::Rank,
        }
    }

    /// Value for Yahoo's `;sort=` collection filter.
    pub fn yahoo_sort_param(&self) -> &'static str {
        match self {
            WaiverSort::Rank | WaiverSort::Trending => "OR",
            WaiverSort::Points => "PTS",
            WaiverSort::Owned => "PO",
        }
    }

    /// Yahoo cannot sort by ownership delta, so trending is re-sorted locally.
    pub fn sorts_locally(&self) -> bool {
        matches!(self, WaiverSort::Trending)
    }
}

impl fmt::Display for WaiverSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WaiverSort::Rank => "rank",
            WaiverSort::Points => "points",
            WaiverSort::Owned => "owned",
            WaiverSort::Trending => "trending",
        };
        write!(f, "{}", s)
    }
}
