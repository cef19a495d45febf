use serde::{Deserialize, Serialize};

/// One OHLC aggregate. Serialized with the compact single-letter keys the
/// chart consumes (`t`, `o`, `h`, `l`, `c`, `v`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Bucket start, epoch milliseconds
    #[serde(rename = "t")]
    pub timestamp: i64,

    #[serde(rename = "o")]
    pub open: f64,

    #[serde(rename = "h")]
    pub high: f64,

    #[serde(rename = "l")]
    pub low: f64,

    #[serde(rename = "c")]
    pub close: f64,

    #[serde(rename = "v", skip_serializing_if = "Option::is_none")]
    pub volume: Option<u64>,
}

impl Bar {
    /// Whether `low <= min(open, close) <= max(open, close) <= high` holds.
    pub fn is_well_ordered(&self) -> bool {
        self.low <= self.open.min(self.close) && self.open.max(self.close) <= self.high
    }
}

/// Round to two decimal places, the precision every price is published at.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(open: f64, high: f64, low: f64, close: f64) -> Bar {
        Bar {
            timestamp: 1_704_067_200_000,
            open,
            high,
            low,
            close,
            volume: None,
        }
    }

    #[test]
    fn test_well_ordered() {
        assert!(bar(100.0, 102.0, 99.0, 101.0).is_well_ordered());
        assert!(bar(100.0, 100.0, 100.0, 100.0).is_well_ordered());
        assert!(!bar(100.0, 100.5, 99.0, 101.0).is_well_ordered());
        assert!(!bar(100.0, 102.0, 100.5, 101.0).is_well_ordered());
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(4600.456), 4600.46);
        assert_eq!(round2(-12.344), -12.34);
        assert_eq!(round2(1.0), 1.0);
    }

    #[test]
    fn test_bar_wire_format() {
        let mut b = bar(1.0, 2.0, 0.5, 1.5);
        let value = serde_json::to_value(&b).unwrap();
        assert_eq!(value["t"], 1_704_067_200_000_i64);
        assert_eq!(value["h"], 2.0);
        assert!(value.get("v").is_none());

        b.volume = Some(1_500_000);
        let value = serde_json::to_value(&b).unwrap();
        assert_eq!(value["v"], 1_500_000);
    }
}
