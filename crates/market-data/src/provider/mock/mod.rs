//! Synthetic market data provider.
//!
//! Generates data with realistic shape for offline and demo use:
//! - Quotes oscillate smoothly with wall-clock time so a polling UI drifts
//!   instead of flickering
//! - Bar series are random walks sized by the range table
//! - Options chains and the S&P 500 constituent table are fixtures
//!
//! Nothing here touches the network, and no operation ever fails.

mod fixtures;
mod series;

pub use fixtures::{
    oscillating_price, COMPONENTS_INDEX, OSCILLATION_AMPLITUDE, OSCILLATION_TIME_CONSTANT_MS,
    PREVIOUS_CLOSE,
};
pub use series::{history_series, random_walk, range_series, BASE_PRICE, HISTORY_DAYS};

use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;

use crate::errors::MarketDataError;
use crate::models::{Bar, IndexComponents, NewsItem, OptionsChain, Quote, Range};
use crate::provider::{MarketDataProvider, ProviderCapabilities};

const PROVIDER_ID: &str = "MOCK";

/// Provider backed entirely by generated data.
#[derive(Clone, Debug, Default)]
pub struct MockProvider;

impl MockProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl MarketDataProvider for MockProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn capabilities(&self) -> ProviderCapabilities {
        ProviderCapabilities {
            supports_news: true,
            supports_options: true,
            supports_components: true,
            live: false,
        }
    }

    async fn get_quote(&self, symbol: &str) -> Result<Quote, MarketDataError> {
        Ok(fixtures::quote(symbol, Utc::now()))
    }

    async fn get_ohlc(&self, symbol: &str, range: Range) -> Result<Vec<Bar>, MarketDataError> {
        let bars = range_series(&mut rand::thread_rng(), range, Utc::now());
        debug!("Mock: generated {} bars for {} ({})", bars.len(), symbol, range);
        Ok(bars)
    }

    async fn get_history(&self, symbol: &str) -> Result<Vec<Bar>, MarketDataError> {
        let bars = history_series(&mut rand::thread_rng(), Utc::now());
        debug!("Mock: generated {} history bars for {}", bars.len(), symbol);
        Ok(bars)
    }

    async fn get_news(&self, symbol: &str) -> Result<Vec<NewsItem>, MarketDataError> {
        Ok(fixtures::news(symbol, Utc::now()))
    }

    async fn get_options_chain(&self, _symbol: &str) -> Result<OptionsChain, MarketDataError> {
        Ok(fixtures::options_chain(&mut rand::thread_rng()))
    }

    async fn get_index_components(
        &self,
        symbol: &str,
    ) -> Result<IndexComponents, MarketDataError> {
        Ok(fixtures::index_components(symbol))
    }
}
