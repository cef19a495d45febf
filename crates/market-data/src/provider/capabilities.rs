//! Provider capabilities.
//!
//! Every provider answers every operation; capabilities describe which ones
//! return real data and which ones always come back empty.

use serde::Serialize;

/// Describes what a market data provider actually supplies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderCapabilities {
    /// Whether news headlines are available.
    pub supports_news: bool,

    /// Whether options chains are available.
    pub supports_options: bool,

    /// Whether index constituents are available.
    pub supports_components: bool,

    /// Whether data comes from a live upstream rather than a generator.
    pub live: bool,
}
