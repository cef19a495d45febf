//! Startup-time provider selection.
//!
//! The process picks exactly one data source when it boots. The result is an
//! immutable `Arc<dyn MarketDataProvider>` handed to whoever serves requests;
//! switching providers means restarting.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use tracing::{info, warn};

use crate::errors::MarketDataError;
use crate::provider::mock::MockProvider;
use crate::provider::polygon::PolygonProvider;
use crate::provider::MarketDataProvider;

/// Which data source to use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProviderKind {
    #[default]
    Mock,
    Polygon,
}

impl ProviderKind {
    /// Lenient parse for configuration values: unknown kinds fall back to
    /// the mock provider.
    pub fn from_setting(value: &str) -> Self {
        value.parse().unwrap_or_else(|_| {
            warn!("Unknown data provider '{}', falling back to mock", value);
            ProviderKind::Mock
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Mock => "mock",
            ProviderKind::Polygon => "polygon",
        }
    }
}

impl FromStr for ProviderKind {
    type Err = MarketDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "mock" => Ok(ProviderKind::Mock),
            "polygon" | "vendor" => Ok(ProviderKind::Polygon),
            other => Err(MarketDataError::Configuration(format!(
                "Unknown data provider: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything needed to build a provider.
#[derive(Clone, Default)]
pub struct ProviderSettings {
    pub kind: ProviderKind,
    /// Vendor credential; only read when `kind` is a vendor.
    pub api_key: Option<String>,
    /// Vendor host override.
    pub base_url: Option<String>,
}

impl fmt::Debug for ProviderSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderSettings")
            .field("kind", &self.kind)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Build the process-wide provider.
///
/// Vendor kinds fail here, at startup, when their credential is missing.
pub fn build_provider(
    settings: &ProviderSettings,
) -> Result<Arc<dyn MarketDataProvider>, MarketDataError> {
    let provider: Arc<dyn MarketDataProvider> = match settings.kind {
        ProviderKind::Mock => Arc::new(MockProvider::new()),
        ProviderKind::Polygon => {
            let api_key = settings.api_key.clone().unwrap_or_default();
            let mut provider = PolygonProvider::new(api_key)?;
            if let Some(base_url) = &settings.base_url {
                provider = provider.with_base_url(base_url.as_str());
            }
            Arc::new(provider)
        }
    };

    info!("Market data provider: {}", provider.id());
    Ok(provider)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kinds() {
        assert_eq!("mock".parse::<ProviderKind>().unwrap(), ProviderKind::Mock);
        assert_eq!("POLYGON".parse::<ProviderKind>().unwrap(), ProviderKind::Polygon);
        assert_eq!("vendor".parse::<ProviderKind>().unwrap(), ProviderKind::Polygon);
        assert_eq!("".parse::<ProviderKind>().unwrap(), ProviderKind::Mock);
        assert!("iex".parse::<ProviderKind>().is_err());
    }

    #[test]
    fn test_unknown_setting_falls_back_to_mock() {
        assert_eq!(ProviderKind::from_setting("iex"), ProviderKind::Mock);
        assert_eq!(ProviderKind::from_setting(" Polygon "), ProviderKind::Polygon);
    }

    #[test]
    fn test_default_builds_mock() {
        let provider = build_provider(&ProviderSettings::default()).unwrap();
        assert_eq!(provider.id(), "MOCK");
    }

    #[test]
    fn test_polygon_without_key_fails_at_build() {
        let settings = ProviderSettings {
            kind: ProviderKind::Polygon,
            api_key: None,
            base_url: None,
        };
        let err = build_provider(&settings).err().unwrap();
        assert!(matches!(err, MarketDataError::Configuration(_)));
    }

    #[test]
    fn test_polygon_with_key_builds() {
        let settings = ProviderSettings {
            kind: ProviderKind::Polygon,
            api_key: Some("secret".to_string()),
            base_url: Some("http://127.0.0.1:9".to_string()),
        };
        let provider = build_provider(&settings).unwrap();
        assert_eq!(provider.id(), "POLYGON");
        assert!(provider.capabilities().live);
    }

    #[test]
    fn test_debug_redacts_key() {
        let settings = ProviderSettings {
            kind: ProviderKind::Polygon,
            api_key: Some("secret".to_string()),
            base_url: None,
        };
        let rendered = format!("{:?}", settings);
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
