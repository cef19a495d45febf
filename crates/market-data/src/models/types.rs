use std::borrow::Cow;

/// Vendor-specific spelling of a symbol (`I:SPX`). Static for table entries,
/// owned when a symbol passes through unchanged.
pub type ProviderSymbol = Cow<'static, str>;
