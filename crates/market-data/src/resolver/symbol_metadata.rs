//! Static symbol metadata lookups.
//!
//! Display names and venue tags used when a provider has no richer source
//! for them.

/// Prefix marking an index identifier on the client side.
pub const INDEX_PREFIX: char = '^';

/// Symbol the UI opens when none is given.
pub const DEFAULT_SYMBOL: &str = "^GSPC";

/// Whether `symbol` follows the caret index convention.
pub fn is_index_symbol(symbol: &str) -> bool {
    symbol.starts_with(INDEX_PREFIX)
}

/// Friendly name for well-known symbols.
pub fn display_name(symbol: &str) -> Option<&'static str> {
    match symbol {
        "^GSPC" => Some("S&P 500"),
        "^DJI" => Some("Dow Jones Industrial Average"),
        "^IXIC" => Some("Nasdaq Composite"),
        "^NDX" => Some("Nasdaq 100"),
        "^RUT" => Some("Russell 2000"),
        "^VIX" => Some("CBOE Volatility Index"),
        _ => None,
    }
}

/// Display name, or the symbol itself when it is not in the table.
pub fn long_name(symbol: &str) -> String {
    display_name(symbol)
        .map(str::to_string)
        .unwrap_or_else(|| symbol.to_string())
}

/// Venue tag shown next to the quote.
pub fn exchange_tag(symbol: &str) -> &'static str {
    if is_index_symbol(symbol) {
        "INDEX"
    } else {
        "NASDAQ"
    }
}
