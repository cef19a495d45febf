//! Error types for the market data crate.
//!
//! Absent data is never an error: providers that have nothing to say about a
//! symbol return an empty collection instead.

use thiserror::Error;

/// Errors that can occur during market data operations.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The provider could not be constructed from the given settings.
    /// Raised at startup, before any network activity.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The upstream data source failed: transport error, non-success
    /// status or a body that could not be decoded.
    #[error("Upstream error: {provider} - {message}")]
    Upstream {
        /// The provider that made the call
        provider: String,
        /// HTTP status returned by the vendor, if a response was received
        status: Option<u16>,
        /// Human readable description of the failure
        message: String,
    },
}

impl MarketDataError {
    /// Shorthand for an upstream failure that never produced a response.
    pub fn upstream(provider: &str, message: impl Into<String>) -> Self {
        Self::Upstream {
            provider: provider.to_string(),
            status: None,
            message: message.into(),
        }
    }

    /// Returns true when the failure originated from the data source rather
    /// than from local configuration.
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::Upstream { .. })
    }

    /// HTTP status reported by the vendor, when there was one.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            Self::Upstream { status, .. } => *status,
            Self::Configuration(_) => None,
        }
    }
}
