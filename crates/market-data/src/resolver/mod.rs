//! Symbol resolution for market data providers.
//!
//! Clients speak one symbol convention (caret-prefixed indexes such as
//! `^GSPC`); vendors speak their own (`I:SPX` on Polygon). Providers call a
//! [`SymbolResolver`] before every request instead of hard-coding
//! substitutions.
//!
//! ```text
//!   "^GSPC" ──► SymbolMap::polygon() ──► "I:SPX"
//!   "AAPL"  ──► SymbolMap::polygon() ──► "AAPL"   (pass-through)
//! ```

mod symbol_map;
mod symbol_metadata;
mod traits;

pub use symbol_map::{SymbolMap, POLYGON_INDEX_SYMBOLS};
pub use symbol_metadata::{
    display_name, exchange_tag, is_index_symbol, long_name, DEFAULT_SYMBOL, INDEX_PREFIX,
};
pub use traits::SymbolResolver;
