use std::sync::Arc;

use quoteboard_market_data::{build_provider, MarketDataProvider};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

pub struct AppState {
    /// Selected once at startup; never swapped while serving.
    pub provider: Arc<dyn MarketDataProvider>,
}

pub fn init_tracing() {
    let log_format = std::env::var("QB_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let settings = config.provider_settings();
    let provider = build_provider(&settings)?;
    tracing::info!(
        "Using {} data provider (configured as '{}')",
        provider.id(),
        config.data_provider
    );
    Ok(Arc::new(AppState { provider }))
}
