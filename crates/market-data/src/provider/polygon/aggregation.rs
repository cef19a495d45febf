//! Range to Polygon aggregate window mapping.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::models::{start_of_year, Range};

/// Start of the MAX window: the vendor plan's history horizon.
const MAX_FROM: (i32, u32, u32) = (2020, 1, 1);

/// Length of the daily history table, in days.
pub const HISTORY_LOOKBACK_DAYS: i64 = 180;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Timespan {
    Minute,
    Day,
}

impl Timespan {
    pub fn as_str(&self) -> &'static str {
        match self {
            Timespan::Minute => "minute",
            Timespan::Day => "day",
        }
    }
}

/// Parameters of a `/v2/aggs/ticker/{s}/range/{multiplier}/{timespan}/{from}/{to}` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aggregation {
    pub multiplier: u32,
    pub timespan: Timespan,
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl Aggregation {
    /// Vendor window for a named range ending today.
    ///
    /// Intraday ranges reach further back than their nominal lookback so
    /// weekends and holidays still leave enough bars to draw.
    pub fn for_range(range: Range, now: DateTime<Utc>) -> Self {
        let today = now.date_naive();
        let days_back = |days: i64| (now - Duration::days(days)).date_naive();

        let (multiplier, timespan, from) = match range {
            Range::OneDay => (5, Timespan::Minute, days_back(7)),
            Range::FiveDays => (30, Timespan::Minute, days_back(20)),
            Range::OneMonth => (1, Timespan::Day, days_back(40)),
            Range::SixMonths => (1, Timespan::Day, days_back(190)),
            Range::YearToDate => (1, Timespan::Day, start_of_year(now).date_naive()),
            Range::OneYear => (1, Timespan::Day, days_back(370)),
            Range::FiveYears => (7, Timespan::Day, days_back(5 * 365)),
            Range::Max => {
                let (y, m, d) = MAX_FROM;
                (1, Timespan::Day, NaiveDate::from_ymd_opt(y, m, d).unwrap_or(today))
            }
        };

        Self {
            multiplier,
            timespan,
            from,
            to: today,
        }
    }

    /// Daily bars over the history window.
    pub fn history(now: DateTime<Utc>) -> Self {
        Self {
            multiplier: 1,
            timespan: Timespan::Day,
            from: (now - Duration::days(HISTORY_LOOKBACK_DAYS)).date_naive(),
            to: now.date_naive(),
        }
    }

    /// Path segment after the ticker.
    pub fn path(&self) -> String {
        format!(
            "range/{}/{}/{}/{}",
            self.multiplier,
            self.timespan.as_str(),
            self.from.format("%Y-%m-%d"),
            self.to.format("%Y-%m-%d")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 7, 1, 15, 0, 0).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_intraday_ranges() {
        let one_day = Aggregation::for_range(Range::OneDay, now());
        assert_eq!(one_day.multiplier, 5);
        assert_eq!(one_day.timespan, Timespan::Minute);
        assert_eq!(one_day.from, date(2025, 6, 24));
        assert_eq!(one_day.path(), "range/5/minute/2025-06-24/2025-07-01");

        let five_days = Aggregation::for_range(Range::FiveDays, now());
        assert_eq!(five_days.multiplier, 30);
        assert_eq!(five_days.from, date(2025, 6, 11));
    }

    #[test]
    fn test_daily_ranges() {
        assert_eq!(
            Aggregation::for_range(Range::YearToDate, now()).from,
            date(2025, 1, 1)
        );
        assert_eq!(
            Aggregation::for_range(Range::OneMonth, now()).from,
            date(2025, 5, 22)
        );
        let five_years = Aggregation::for_range(Range::FiveYears, now());
        assert_eq!(five_years.multiplier, 7);
        assert_eq!(five_years.timespan, Timespan::Day);
    }

    #[test]
    fn test_max_starts_at_history_horizon() {
        let max = Aggregation::for_range(Range::Max, now());
        assert_eq!(max.path(), "range/1/day/2020-01-01/2025-07-01");
    }

    #[test]
    fn test_history_window() {
        let history = Aggregation::history(now());
        assert_eq!(history.from, date(2025, 1, 2));
        assert_eq!(history.to, date(2025, 7, 1));
    }
}
