use serde::{Deserialize, Serialize};

/// One constituent of an index.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IndexComponentRow {
    pub symbol: String,
    pub name: String,
    /// Index weight as a percent string, e.g. `7.1%`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    pub last: f64,
    /// Signed daily move as a percent string, e.g. `+0.6%`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change: Option<String>,
}

/// Constituents of an index. Empty for symbols that are not indexes or that
/// the provider does not cover.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexComponents {
    pub rows: Vec<IndexComponentRow>,
}

impl IndexComponents {
    pub fn empty() -> Self {
        Self::default()
    }
}
