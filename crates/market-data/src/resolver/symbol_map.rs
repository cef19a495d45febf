//! Table-driven symbol namespacing.
//!
//! Index identifiers use a leading caret on the client side (`^GSPC`) while
//! vendors have their own prefixes. The mapping lives in one table so new
//! entries never touch provider call sites.

use std::borrow::Cow;
use std::collections::HashMap;

use crate::models::ProviderSymbol;

use super::traits::SymbolResolver;

/// Caret-index to Polygon index-ticker mappings.
pub const POLYGON_INDEX_SYMBOLS: &[(&str, &str)] = &[
    ("^GSPC", "I:SPX"),
    ("^DJI", "I:DJI"),
    ("^IXIC", "I:COMP"),
    ("^NDX", "I:NDX"),
    ("^RUT", "I:RUT"),
    ("^VIX", "I:VIX"),
];

/// Lookup table from client symbols to provider symbols.
#[derive(Clone, Debug, Default)]
pub struct SymbolMap {
    mappings: HashMap<Cow<'static, str>, Cow<'static, str>>,
}

impl SymbolMap {
    /// An empty map: every symbol passes through.
    pub fn new() -> Self {
        Self::default()
    }

    /// The default Polygon table.
    pub fn polygon() -> Self {
        POLYGON_INDEX_SYMBOLS
            .iter()
            .fold(Self::new(), |map, (from, to)| map.with_entry(*from, *to))
    }

    /// Add or replace a mapping.
    pub fn with_entry(
        mut self,
        from: impl Into<Cow<'static, str>>,
        to: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.mappings.insert(from.into(), to.into());
        self
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}

impl SymbolResolver for SymbolMap {
    fn resolve(&self, symbol: &str) -> ProviderSymbol {
        match self.mappings.get(symbol) {
            Some(mapped) => mapped.clone(),
            None => Cow::Owned(symbol.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polygon_maps_sp500() {
        let map = SymbolMap::polygon();
        assert_eq!(map.resolve("^GSPC"), "I:SPX");
        assert_eq!(map.resolve("^IXIC"), "I:COMP");
        assert_eq!(map.len(), POLYGON_INDEX_SYMBOLS.len());
    }

    #[test]
    fn test_unmapped_symbols_pass_through() {
        let map = SymbolMap::polygon();
        assert_eq!(map.resolve("AAPL"), "AAPL");
        assert_eq!(map.resolve("^FTSE"), "^FTSE");
        assert!(SymbolMap::new().is_empty());
        assert_eq!(SymbolMap::new().resolve("^GSPC"), "^GSPC");
    }

    #[test]
    fn test_with_entry_extends_and_overrides() {
        let map = SymbolMap::polygon()
            .with_entry("^FTSE", "I:UKX")
            .with_entry("^GSPC", "I:SPX.X");
        assert_eq!(map.resolve("^FTSE"), "I:UKX");
        assert_eq!(map.resolve("^GSPC"), "I:SPX.X");
    }
}
