use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A headline linked to a symbol.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    /// Unique within a single response
    pub id: String,
    pub title: String,
    /// Publisher display name
    pub source: String,
    pub url: String,
    pub published_at: DateTime<Utc>,
}
