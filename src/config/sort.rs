//! Listing sort mode definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Sort order for a subreddit listing.
///
/// The string form accepted on the CLI and in config files is the endpoint
/// path name (`hot`, `new`, ...); `top` additionally accepts a composite
/// `top/<period>` form that maps to the `t` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    #[default]
    Hot,
    New,
    Rising,
    Controversial,
    Top(Option<TimePeriod>),
}

impl SortMode {
    /// Endpoint path segment for this sort.
    pub fn path(&self) -> &'static str {
        match self {
            SortMode::Hot => "hot",
            SortMode::New => "new",
            SortMode::Rising => "rising",
            SortMode::Controversial => "controversial",
            SortMode::Top(_) => "top",
        }
    }

    /// Value for the `t` query parameter, when this sort carries one.
    pub fn time_period(&self) -> Option<TimePeriod> {
        match self {
            SortMode::Top(period) => *period,
            _ => None,
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.time_period() {
            Some(period) => write!(f, "{}/{}", self.path(), period),
            None => write!(f, "{}", self.path()),
        }
    }
}

impl FromStr for SortMode {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        if let Some(period) = s.strip_prefix("top/") {
            return Ok(SortMode::Top(Some(period.parse()?)));
        }
        match s.as_str() {
            "hot" => Ok(SortMode::Hot),
            "new" => Ok(SortMode::New),
            "rising" => Ok(SortMode::Rising),
            "controversial" => Ok(SortMode::Controversial),
            "top" => Ok(SortMode::Top(None)),
            _ => Err(Error::InvalidSort(s.to_string())),
        }
    }
}

/// Time window for the `top` sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimePeriod {
    Hour,
    Day,
    Week,
    Month,
    Year,
    All,
}

impl fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TimePeriod::Hour => "hour",
            TimePeriod::Day => "day",
            TimePeriod::Week => "week",
            TimePeriod::Month => "month",
            TimePeriod::Year => "year",
            TimePeriod::All => "all",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for TimePeriod {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hour" => Ok(TimePeriod::Hour),
            "day" => Ok(TimePeriod::Day),
            "week" => Ok(TimePeriod::Week),
            "month" => Ok(TimePeriod::Month),
            "year" => Ok(TimePeriod::Year),
            "all" => Ok(TimePeriod::All),
            _ => Err(Error::InvalidSort(format!("unknown time period: {}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_modes() {
        assert_eq!("hot".parse::<SortMode>().unwrap(), SortMode::Hot);
        assert_eq!("New".parse::<SortMode>().unwrap(), SortMode::New);
        assert_eq!("top".parse::<SortMode>().unwrap(), SortMode::Top(None));
    }

    #[test]
    fn test_parse_composite_top() {
        let sort = "top/day".parse::<SortMode>().unwrap();
        assert_eq!(sort, SortMode::Top(Some(TimePeriod::Day)));
        assert_eq!(sort.path(), "top");
        assert_eq!(sort.time_period(), Some(TimePeriod::Day));
    }

    #[test]
    fn test_parse_unknown_mode() {
        assert!("best-ever".parse::<SortMode>().is_err());
        assert!("top/fortnight".parse::<SortMode>().is_err());
    }

    #[test]
    fn test_display_round_trip() {
        assert_eq!(SortMode::Hot.to_string(), "hot");
        assert_eq!(SortMode::Top(Some(TimePeriod::All)).to_string(), "top/all");
    }
}
