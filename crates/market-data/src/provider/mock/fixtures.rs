//! Synthetic quote, news, options and index-component data.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::models::{
    round2, IndexComponentRow, IndexComponents, KeyStats, NewsItem, OptionType, OptionsChain,
    OptionsRow, PricePoint, Quote, RangeStat, Session,
};
use crate::resolver::{exchange_tag, long_name};

use super::series::BASE_PRICE;

/// Previous session's close used by every synthetic quote.
pub const PREVIOUS_CLOSE: f64 = 4587.78;

/// Peak distance of the quote from [`BASE_PRICE`].
pub const OSCILLATION_AMPLITUDE: f64 = 30.0;

/// Time constant of the oscillation in milliseconds (about 2.8 hours).
pub const OSCILLATION_TIME_CONSTANT_MS: f64 = 1e7;

/// The only symbol with a constituent table.
pub const COMPONENTS_INDEX: &str = "^GSPC";

const OPTION_EXPIRATIONS: [&str; 2] = ["2025-12-19", "2026-03-20"];
const OPTION_STRIKES: [f64; 5] = [4400.0, 4500.0, 4600.0, 4700.0, 4800.0];

/// Last price at `now`: a slow sinusoid around the base level.
pub fn oscillating_price(now: DateTime<Utc>) -> f64 {
    let t = now.timestamp_millis() as f64;
    BASE_PRICE + (t / OSCILLATION_TIME_CONSTANT_MS).sin() * OSCILLATION_AMPLITUDE
}

pub fn quote(symbol: &str, now: DateTime<Utc>) -> Quote {
    let last = round2(oscillating_price(now));
    let change = last - PREVIOUS_CLOSE;
    let market_cap = if symbol == COMPONENTS_INDEX {
        40_000_000_000_000.0
    } else {
        2_500_000_000_000.0
    };

    Quote {
        symbol: symbol.to_string(),
        long_name: long_name(symbol),
        currency: "USD".to_string(),
        exchange: exchange_tag(symbol).to_string(),
        price: PricePoint {
            last,
            change: round2(change),
            change_pct: round2(change / PREVIOUS_CLOSE * 100.0),
            as_of: now,
            session: Session::Regular,
        },
        stats: KeyStats {
            previous_close: Some(PREVIOUS_CLOSE),
            open: Some(round2(PREVIOUS_CLOSE + 2.2)),
            day_range: Some(RangeStat::new(4_578.2, 4_610.55, last)),
            week52_range: Some(RangeStat::new(4_100.1, 4_820.2, last)),
            volume: Some(170_234_567),
            avg_volume: Some(195_000_000),
            market_cap: Some(market_cap),
        },
    }
}

pub fn news(symbol: &str, now: DateTime<Utc>) -> Vec<NewsItem> {
    vec![
        NewsItem {
            id: "1".to_string(),
            title: format!("{} edges higher amid mixed macro signals", symbol),
            source: "AltWire".to_string(),
            url: "https://example.com/1".to_string(),
            published_at: now - Duration::hours(1),
        },
        NewsItem {
            id: "2".to_string(),
            title: format!("Analyst notes on {}: key levels into close", symbol),
            source: "StreetBeat".to_string(),
            url: "https://example.com/2".to_string(),
            published_at: now - Duration::hours(6),
        },
    ]
}

/// Every expiration x strike x {call, put}. Prices widen with distance from
/// the base level; open interest and volume are random.
pub fn options_chain<R: Rng + ?Sized>(rng: &mut R) -> OptionsChain {
    let mut rows = Vec::with_capacity(OPTION_EXPIRATIONS.len() * OPTION_STRIKES.len() * 2);

    for expiration in OPTION_EXPIRATIONS {
        for strike in OPTION_STRIKES {
            let mid = ((BASE_PRICE - strike).abs() / 100.0 + 2.0).max(0.5);
            for (option_type, spread, iv) in [
                (OptionType::Call, 0.2, "18%"),
                (OptionType::Put, 0.3, "20%"),
            ] {
                rows.push(OptionsRow {
                    expiration: expiration.to_string(),
                    strike,
                    option_type,
                    bid: round2(mid - spread),
                    ask: round2(mid + spread),
                    last: round2(mid),
                    implied_volatility: iv.to_string(),
                    open_interest: rng.gen_range(0..10_000),
                    volume: rng.gen_range(0..5_000),
                });
            }
        }
    }

    OptionsChain { rows }
}

pub fn index_components(symbol: &str) -> IndexComponents {
    if symbol != COMPONENTS_INDEX {
        return IndexComponents::empty();
    }

    let rows = [
        ("AAPL", "Apple Inc.", "7.1%", 210.42, "+0.6%"),
        ("MSFT", "Microsoft Corp.", "7.0%", 412.12, "+0.3%"),
        ("NVDA", "NVIDIA Corp.", "6.5%", 118.55, "-0.2%"),
        ("AMZN", "Amazon.com Inc.", "3.5%", 168.4, "+0.1%"),
        ("GOOGL", "Alphabet Inc. A", "2.2%", 145.9, "+0.4%"),
        ("META", "Meta Platforms Inc.", "2.1%", 345.33, "+0.8%"),
    ]
    .into_iter()
    .map(|(symbol, name, weight, last, change)| IndexComponentRow {
        symbol: symbol.to_string(),
        name: name.to_string(),
        weight: Some(weight.to_string()),
        last,
        change: Some(change.to_string()),
    })
    .collect();

    IndexComponents { rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 7, 1, 15, 0, 0).unwrap()
    }

    #[test]
    fn test_quote_change_pct_matches_change() {
        let quote = quote("^GSPC", now());
        let previous_close = quote.stats.previous_close.unwrap();
        let expected = quote.price.change / previous_close * 100.0;
        assert!((quote.price.change_pct - expected).abs() <= 0.01);
        assert_eq!(quote.long_name, "S&P 500");
        assert_eq!(quote.exchange, "INDEX");
        assert_eq!(quote.stats.market_cap, Some(40_000_000_000_000.0));
    }

    #[test]
    fn test_quote_for_equity() {
        let quote = quote("AAPL", now());
        assert_eq!(quote.long_name, "AAPL");
        assert_eq!(quote.exchange, "NASDAQ");
        assert_eq!(quote.stats.market_cap, Some(2_500_000_000_000.0));
        assert_eq!(quote.price.session, Session::Regular);
    }

    #[test]
    fn test_quote_stays_within_oscillation_band() {
        for minutes in [0, 17, 90, 600, 6_000] {
            let at = now() + Duration::minutes(minutes);
            let last = quote("^GSPC", at).price.last;
            assert!((last - BASE_PRICE).abs() <= OSCILLATION_AMPLITUDE + 0.01);
        }
    }

    #[test]
    fn test_quote_moves_gradually_between_polls() {
        let a = oscillating_price(now());
        let b = oscillating_price(now() + Duration::milliseconds(2_500));
        // max slope is amplitude / time constant per millisecond
        assert!((a - b).abs() <= 2_500.0 * OSCILLATION_AMPLITUDE / OSCILLATION_TIME_CONSTANT_MS);
    }

    #[test]
    fn test_news_mentions_symbol_with_unique_ids() {
        let items = news("MSFT", now());
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|n| n.title.contains("MSFT")));
        assert_ne!(items[0].id, items[1].id);
        assert!(items[0].published_at > items[1].published_at);
    }

    #[test]
    fn test_options_chain_shape() {
        let chain = options_chain(&mut StdRng::seed_from_u64(1));
        assert_eq!(chain.rows.len(), 20);

        let calls = chain.rows.iter().filter(|r| r.option_type == OptionType::Call).count();
        assert_eq!(calls, 10);

        for row in &chain.rows {
            assert!(row.bid < row.last && row.last < row.ask);
            assert!(row.open_interest < 10_000);
            assert!(row.volume < 5_000);
        }

        let atm_put = chain
            .rows
            .iter()
            .find(|r| r.strike == 4600.0 && r.option_type == OptionType::Put)
            .unwrap();
        assert_eq!(atm_put.last, 2.0);
        assert_eq!(atm_put.bid, 1.7);
        assert_eq!(atm_put.ask, 2.3);
        assert_eq!(atm_put.implied_volatility, "20%");
    }

    #[test]
    fn test_components_only_for_sp500() {
        let rows = index_components("^GSPC").rows;
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0].symbol, "AAPL");
        assert!(index_components("^DJI").rows.is_empty());
        assert!(index_components("AAPL").rows.is_empty());
    }
}
