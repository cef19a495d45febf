//! Market data models
//!
//! The normalized shapes every provider produces and the API layer serves
//! unchanged:
//! - `quote` - Quote with price point and key statistics
//! - `bar` - OHLC aggregates
//! - `news` - Headlines
//! - `options` - Options chain rows
//! - `components` - Index constituents
//! - `range` - Named lookback/granularity buckets for time series

mod bar;
mod components;
mod news;
mod options;
mod quote;
mod range;
mod types;

pub use bar::{round2, Bar};
pub use components::{IndexComponentRow, IndexComponents};
pub use news::NewsItem;
pub use options::{OptionType, OptionsChain, OptionsRow};
pub use quote::{KeyStats, PricePoint, Quote, RangeStat, Session};
pub use range::{start_of_year, Range, UnknownRange};
pub use types::ProviderSymbol;
