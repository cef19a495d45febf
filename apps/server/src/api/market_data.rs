//! Read endpoints. Each one delegates to the active provider and is never
//! cached.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, HeaderValue},
    routing::get,
    Json, Router,
};
use quoteboard_market_data::{
    Bar, IndexComponents, NewsItem, OptionsChain, Quote, Range, DEFAULT_SYMBOL,
};
use serde::Deserialize;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::{error::ApiResult, main_lib::AppState};

const DEFAULT_RANGE: Range = Range::OneDay;

#[derive(Debug, Default, Deserialize)]
struct SymbolQuery {
    symbol: Option<String>,
}

impl SymbolQuery {
    fn symbol(&self) -> &str {
        resolve_symbol(self.symbol.as_deref())
    }
}

#[derive(Debug, Default, Deserialize)]
struct OhlcQuery {
    symbol: Option<String>,
    range: Option<String>,
}

impl OhlcQuery {
    fn symbol(&self) -> &str {
        resolve_symbol(self.symbol.as_deref())
    }

    fn range(&self) -> Range {
        match self.range.as_deref() {
            None | Some("") => DEFAULT_RANGE,
            Some(value) => Range::from_param(value),
        }
    }
}

/// Empty and whitespace-only symbols count as absent.
fn resolve_symbol(symbol: Option<&str>) -> &str {
    match symbol.map(str::trim) {
        Some(s) if !s.is_empty() => s,
        _ => DEFAULT_SYMBOL,
    }
}

async fn get_quote(
    State(state): State<Arc<AppState>>,
    Query(q): Query<SymbolQuery>,
) -> ApiResult<Json<Quote>> {
    let quote = state.provider.get_quote(q.symbol()).await?;
    Ok(Json(quote))
}

async fn get_ohlc(
    State(state): State<Arc<AppState>>,
    Query(q): Query<OhlcQuery>,
) -> ApiResult<Json<Vec<Bar>>> {
    let bars = state.provider.get_ohlc(q.symbol(), q.range()).await?;
    Ok(Json(bars))
}

async fn get_history(
    State(state): State<Arc<AppState>>,
    Query(q): Query<SymbolQuery>,
) -> ApiResult<Json<Vec<Bar>>> {
    let bars = state.provider.get_history(q.symbol()).await?;
    Ok(Json(bars))
}

async fn get_news(
    State(state): State<Arc<AppState>>,
    Query(q): Query<SymbolQuery>,
) -> ApiResult<Json<Vec<NewsItem>>> {
    let news = state.provider.get_news(q.symbol()).await?;
    Ok(Json(news))
}

async fn get_options(
    State(state): State<Arc<AppState>>,
    Query(q): Query<SymbolQuery>,
) -> ApiResult<Json<OptionsChain>> {
    let chain = state.provider.get_options_chain(q.symbol()).await?;
    Ok(Json(chain))
}

async fn get_components(
    State(state): State<Arc<AppState>>,
    Query(q): Query<SymbolQuery>,
) -> ApiResult<Json<IndexComponents>> {
    let components = state.provider.get_index_components(q.symbol()).await?;
    Ok(Json(components))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/quote", get(get_quote))
        .route("/ohlc", get(get_ohlc))
        .route("/history", get(get_history))
        .route("/news", get(get_news))
        .route("/options", get(get_options))
        .route("/components", get(get_components))
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
}
