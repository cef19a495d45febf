//! Resolution traits for the market data crate.
//!
//! Defines the abstraction for turning a client symbol into the spelling a
//! particular vendor expects.

use crate::models::ProviderSymbol;

/// Maps client-facing symbols to provider-specific ones.
///
/// Implementations must be total: a symbol the resolver has no rule for is
/// returned unchanged.
pub trait SymbolResolver: Send + Sync {
    /// Resolve `symbol` into the provider's namespace.
    fn resolve(&self, symbol: &str) -> ProviderSymbol;
}
