//! Market data provider trait definitions.
//!
//! This module defines the core `MarketDataProvider` trait that all
//! market data providers must implement.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{Bar, IndexComponents, NewsItem, OptionsChain, Quote, Range};

use super::capabilities::ProviderCapabilities;

/// Trait for market data providers.
///
/// Implement this trait to add support for a new market data source. A
/// provider is built once at startup and shared read-only by every request
/// handler, so implementations must not rely on interior mutation.
///
/// Operations a provider has no data for return an empty result rather than
/// an error.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use quoteboard_market_data::provider::{MarketDataProvider, ProviderCapabilities};
///
/// struct MyProvider {
///     api_key: String,
/// }
///
/// #[async_trait]
/// impl MarketDataProvider for MyProvider {
///     fn id(&self) -> &'static str {
///         "MY_PROVIDER"
///     }
///
///     fn capabilities(&self) -> ProviderCapabilities {
///         ProviderCapabilities {
///             supports_news: true,
///             supports_options: false,
///             supports_components: false,
///             live: true,
///         }
///     }
///
///     // ... implement the data methods
/// }
/// ```
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Unique identifier for this provider ("MOCK", "POLYGON", ...).
    ///
    /// Used for logging and error messages.
    fn id(&self) -> &'static str;

    /// Describes which operations return real data.
    fn capabilities(&self) -> ProviderCapabilities;

    /// Fetch the latest quote for a symbol.
    async fn get_quote(&self, symbol: &str) -> Result<Quote, MarketDataError>;

    /// Fetch a bar series for a symbol over a named range.
    ///
    /// Bars are ordered by timestamp ascending, with no duplicates.
    async fn get_ohlc(&self, symbol: &str, range: Range) -> Result<Vec<Bar>, MarketDataError>;

    /// Fetch the fixed daily history used by the historical data table.
    ///
    /// Independent of any range selection.
    async fn get_history(&self, symbol: &str) -> Result<Vec<Bar>, MarketDataError>;

    /// Fetch recent headlines. Ordering is not guaranteed.
    async fn get_news(&self, symbol: &str) -> Result<Vec<NewsItem>, MarketDataError>;

    /// Fetch the options chain. Default implementation returns an empty chain.
    async fn get_options_chain(&self, symbol: &str) -> Result<OptionsChain, MarketDataError> {
        let _ = symbol;
        Ok(OptionsChain::empty())
    }

    /// Fetch index constituents. Default implementation returns an empty set.
    async fn get_index_components(
        &self,
        symbol: &str,
    ) -> Result<IndexComponents, MarketDataError> {
        let _ = symbol;
        Ok(IndexComponents::empty())
    }
}
