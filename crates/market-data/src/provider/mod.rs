//! Market data provider abstractions and implementations.
//!
//! This module contains:
//! - The `MarketDataProvider` trait that all providers implement
//! - Provider capabilities
//! - Concrete providers: a synthetic generator and the Polygon adapter
//!
//! # Symbol Resolution
//!
//! Providers receive the client's symbol. Vendor adapters translate it with
//! a [`SymbolResolver`](crate::resolver::SymbolResolver) right before each
//! request and report the requested symbol back in their results.

mod capabilities;
mod traits;

pub mod mock;
pub mod polygon;

// Re-exports
pub use capabilities::ProviderCapabilities;
pub use traits::MarketDataProvider;
