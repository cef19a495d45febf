use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use quoteboard_market_data::ProviderCapabilities;
use serde::Serialize;

use crate::main_lib::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProviderInfo {
    id: &'static str,
    capabilities: ProviderCapabilities,
}

async fn get_provider_info(State(state): State<Arc<AppState>>) -> Json<ProviderInfo> {
    Json(ProviderInfo {
        id: state.provider.id(),
        capabilities: state.provider.capabilities(),
    })
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/provider", get(get_provider_info))
}
