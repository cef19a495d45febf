use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Named lookback/granularity bucket for time-series queries.
///
/// | range | lookback                 | step   |
/// |-------|--------------------------|--------|
/// | 1D    | 6.5 hours                | 3 min  |
/// | 5D    | 5 days                   | 24 min |
/// | 1M    | 30 days                  | 1 day  |
/// | 6M    | 182 days                 | 1 day  |
/// | YTD   | since Jan 1 (UTC)        | 1 day  |
/// | 1Y    | 365 days                 | 1 day  |
/// | 5Y    | 5 x 365 days             | 7 days |
/// | MAX   | 10 x 365 days            | 7 days |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Range {
    #[serde(rename = "1D")]
    OneDay,
    #[serde(rename = "5D")]
    FiveDays,
    #[serde(rename = "1M")]
    OneMonth,
    #[serde(rename = "6M")]
    SixMonths,
    #[serde(rename = "YTD")]
    YearToDate,
    #[serde(rename = "1Y")]
    OneYear,
    #[serde(rename = "5Y")]
    FiveYears,
    #[serde(rename = "MAX")]
    Max,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown range: {0}")]
pub struct UnknownRange(pub String);

impl Range {
    pub const ALL: [Range; 8] = [
        Range::OneDay,
        Range::FiveDays,
        Range::OneMonth,
        Range::SixMonths,
        Range::YearToDate,
        Range::OneYear,
        Range::FiveYears,
        Range::Max,
    ];

    /// Lenient parse for query parameters: anything unrecognized maps to the
    /// coarsest bucket.
    pub fn from_param(value: &str) -> Self {
        value.parse().unwrap_or(Range::Max)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Range::OneDay => "1D",
            Range::FiveDays => "5D",
            Range::OneMonth => "1M",
            Range::SixMonths => "6M",
            Range::YearToDate => "YTD",
            Range::OneYear => "1Y",
            Range::FiveYears => "5Y",
            Range::Max => "MAX",
        }
    }

    /// Sampling granularity.
    pub fn step(&self) -> Duration {
        match self {
            Range::OneDay => Duration::minutes(3),
            Range::FiveDays => Duration::minutes(24),
            Range::OneMonth
            | Range::SixMonths
            | Range::YearToDate
            | Range::OneYear => Duration::days(1),
            Range::FiveYears | Range::Max => Duration::days(7),
        }
    }

    /// Start of the lookback window ending at `now`.
    pub fn window_start(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            Range::OneDay => now - (Duration::hours(6) + Duration::minutes(30)),
            Range::FiveDays => now - Duration::days(5),
            Range::OneMonth => now - Duration::days(30),
            Range::SixMonths => now - Duration::days(182),
            Range::YearToDate => start_of_year(now),
            Range::OneYear => now - Duration::days(365),
            Range::FiveYears => now - Duration::days(5 * 365),
            Range::Max => now - Duration::days(10 * 365),
        }
    }

    /// Number of whole steps that fit in the window, never less than one.
    pub fn bar_count(&self, now: DateTime<Utc>) -> usize {
        let window = (now - self.window_start(now)).num_milliseconds();
        let step = self.step().num_milliseconds();
        usize::try_from(window / step).unwrap_or(0).max(1)
    }
}

/// Midnight UTC on January 1st of `now`'s year.
pub fn start_of_year(now: DateTime<Utc>) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(now.year(), 1, 1, 0, 0, 0)
        .single()
        .unwrap_or(now)
}

impl FromStr for Range {
    type Err = UnknownRange;

    /// Exact, case-sensitive match on the wire name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Range::ALL
            .into_iter()
            .find(|range| range.as_str() == s)
            .ok_or_else(|| UnknownRange(s.to_string()))
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
