//! Polygon.io API response models.
//!
//! Only the fields the adapter maps are declared; everything else in the
//! vendor payload is ignored.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Envelope shared by the aggregates endpoints (`/prev`, `/range/...`).
#[derive(Debug, Deserialize)]
pub struct AggregatesResponse {
    #[serde(default)]
    pub results: Option<Vec<AggregateBar>>,
}

/// A single aggregate bar.
#[derive(Debug, Clone, Deserialize)]
pub struct AggregateBar {
    /// Bucket start, epoch milliseconds
    pub t: i64,
    pub o: f64,
    pub h: f64,
    pub l: f64,
    pub c: f64,
    /// Volume; absent for indices, sometimes fractional for equities
    #[serde(default)]
    pub v: Option<f64>,
}

/// Envelope for `/v2/reference/news`.
#[derive(Debug, Deserialize)]
pub struct NewsResponse {
    #[serde(default)]
    pub results: Option<Vec<NewsArticle>>,
}

#[derive(Debug, Deserialize)]
pub struct NewsArticle {
    pub id: Option<String>,
    pub title: Option<String>,
    pub article_url: Option<String>,
    pub published_utc: Option<DateTime<Utc>>,
    #[serde(default)]
    pub publisher: Option<Publisher>,
}

#[derive(Debug, Deserialize)]
pub struct Publisher {
    pub name: Option<String>,
}
