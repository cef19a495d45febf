use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Trading session a quoted price belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Session {
    #[default]
    Regular,
    Pre,
    Post,
}

/// Low/high band with the current value inside it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RangeStat {
    pub min: f64,
    pub max: f64,
    pub current: f64,
}

impl RangeStat {
    pub fn new(min: f64, max: f64, current: f64) -> Self {
        Self { min, max, current }
    }

    /// Position of `current` within the band, clamped to `0.0..=1.0`.
    ///
    /// A degenerate band (min == max) uses a span of one unit.
    pub fn position(&self) -> f64 {
        let span = self.max - self.min;
        let span = if span == 0.0 { 1.0 } else { span };
        ((self.current - self.min) / span).clamp(0.0, 1.0)
    }
}

/// Last price and its move against the previous close.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricePoint {
    pub last: f64,
    pub change: f64,
    pub change_pct: f64,
    pub as_of: DateTime<Utc>,
    pub session: Session,
}

/// Key statistics shown next to the quote. Every field is optional.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_close: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub open: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_range: Option<RangeStat>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub week52_range: Option<RangeStat>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_volume: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<f64>,
}

/// Normalized quote returned by every provider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Symbol as requested by the client (never the vendor's namespaced form)
    pub symbol: String,
    pub long_name: String,
    /// ISO 4217 currency code
    pub currency: String,
    /// Free-text venue tag (INDEX, NASDAQ, ...)
    pub exchange: String,
    pub price: PricePoint,
    pub stats: KeyStats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_position_clamps() {
        assert_eq!(RangeStat::new(10.0, 20.0, 15.0).position(), 0.5);
        assert_eq!(RangeStat::new(10.0, 20.0, 5.0).position(), 0.0);
        assert_eq!(RangeStat::new(10.0, 20.0, 25.0).position(), 1.0);
    }

    #[test]
    fn test_range_position_degenerate_band() {
        assert_eq!(RangeStat::new(10.0, 10.0, 10.0).position(), 0.0);
        assert_eq!(RangeStat::new(10.0, 10.0, 10.5).position(), 0.5);
    }

    #[test]
    fn test_quote_serializes_camel_case_and_skips_missing_stats() {
        let quote = Quote {
            symbol: "AAPL".to_string(),
            long_name: "AAPL".to_string(),
            currency: "USD".to_string(),
            exchange: "NASDAQ".to_string(),
            price: PricePoint {
                last: 210.42,
                change: 1.2,
                change_pct: 0.57,
                as_of: Utc::now(),
                session: Session::Regular,
            },
            stats: KeyStats {
                previous_close: Some(209.22),
                week52_range: Some(RangeStat::new(150.0, 240.0, 210.42)),
                ..Default::default()
            },
        };

        let value = serde_json::to_value(&quote).unwrap();
        assert_eq!(value["longName"], "AAPL");
        assert_eq!(value["price"]["changePct"], 0.57);
        assert_eq!(value["price"]["session"], "regular");
        assert!(value["price"]["asOf"].is_string());
        assert_eq!(value["stats"]["previousClose"], 209.22);
        assert_eq!(value["stats"]["week52Range"]["max"], 240.0);
        assert!(value["stats"].get("open").is_none());
        assert!(value["stats"].get("marketCap").is_none());
    }
}
