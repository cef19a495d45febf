use serde::{Deserialize, Serialize};

/// Call or put.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OptionType {
    #[serde(rename = "C")]
    Call,
    #[serde(rename = "P")]
    Put,
}

/// One contract line in an options chain.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OptionsRow {
    /// Expiration date, `YYYY-MM-DD`
    #[serde(rename = "exp")]
    pub expiration: String,
    pub strike: f64,
    #[serde(rename = "type")]
    pub option_type: OptionType,
    pub bid: f64,
    pub ask: f64,
    pub last: f64,
    /// Implied volatility as a percent string, e.g. `18%`
    #[serde(rename = "iv")]
    pub implied_volatility: String,
    #[serde(rename = "oi")]
    pub open_interest: u64,
    pub volume: u64,
}

/// Options chain for a symbol. Empty when the provider has no chain.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OptionsChain {
    pub rows: Vec<OptionsRow>,
}

impl OptionsChain {
    pub fn empty() -> Self {
        Self::default()
    }
}
