use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use quoteboard_market_data::{ProviderKind, ProviderSettings};

pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub static_dir: String,
    /// Raw `DATA_PROVIDER` value; resolved once tracing is up so a bad value
    /// is logged.
    pub data_provider: String,
    pub polygon_api_key: Option<String>,
    pub polygon_base_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            cors_allow: vec!["*".to_string()],
            request_timeout: Duration::from_millis(30000),
            static_dir: "dist".to_string(),
            data_provider: ProviderKind::Mock.to_string(),
            polygon_api_key: None,
            polygon_base_url: None,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("QB_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid QB_LISTEN_ADDR")?;
        let cors_allow = std::env::var("QB_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("QB_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        let static_dir = std::env::var("QB_STATIC_DIR").unwrap_or_else(|_| "dist".into());
        let data_provider = std::env::var("DATA_PROVIDER").unwrap_or_else(|_| "mock".into());

        Ok(Self {
            listen_addr,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            static_dir,
            data_provider,
            polygon_api_key: non_empty_var("POLYGON_API_KEY"),
            polygon_base_url: non_empty_var("POLYGON_BASE_URL"),
        })
    }

    /// Resolve the provider settings. Unknown kinds fall back to mock with a
    /// warning, so call this after tracing is initialised.
    pub fn provider_settings(&self) -> ProviderSettings {
        ProviderSettings {
            kind: ProviderKind::from_setting(&self.data_provider),
            api_key: self.polygon_api_key.clone(),
            base_url: self.polygon_base_url.clone(),
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
