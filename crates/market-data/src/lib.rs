//! Quoteboard Market Data Crate
//!
//! This crate provides the provider abstraction behind the quote pages:
//! one normalized data model, one async trait, and interchangeable data
//! sources behind it.
//!
//! # Architecture
//!
//! ```text
//! +------------------+
//! |  Read endpoints  |  (symbol, range)
//! +------------------+
//!          |
//!          v
//! +------------------+     +------------------+
//! | MarketDataProvider| -->|  SymbolResolver  |  (^GSPC -> I:SPX)
//! +------------------+     +------------------+
//!     |          |
//!     v          v
//! +--------+ +----------+
//! |  Mock  | | Polygon  |
//! +--------+ +----------+
//!          |
//!          v
//! +------------------+
//! | Quote / Bar /... |  (normalized model)
//! +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`Quote`] - Last price, change and key statistics
//! - [`Bar`] - OHLC aggregate
//! - [`NewsItem`], [`OptionsChain`], [`IndexComponents`]
//! - [`Range`] - Named lookback/granularity bucket
//! - [`MarketDataProvider`] - The provider contract
//! - [`build_provider`] - Startup-time provider selection

pub mod errors;
pub mod models;
pub mod provider;
pub mod resolver;
pub mod selector;

pub use errors::MarketDataError;

// Re-export all public types from models
pub use models::{
    Bar, IndexComponentRow, IndexComponents, KeyStats, NewsItem, OptionType, OptionsChain,
    OptionsRow, PricePoint, Quote, Range, RangeStat, Session,
};

// Re-export resolver types
pub use resolver::{SymbolMap, SymbolResolver, DEFAULT_SYMBOL};

// Re-export provider types
pub use provider::mock::MockProvider;
pub use provider::polygon::PolygonProvider;
pub use provider::{MarketDataProvider, ProviderCapabilities};

// Re-export selection
pub use selector::{build_provider, ProviderKind, ProviderSettings};
