//! Client configuration — base URL, credentials and dashboard defaults.
//!
//! Nothing here is process-global: a `ClientConfig` is built (or read from the
//! environment) and handed to the client builder, so tests can point a client
//! at any base URL.

use crate::error::SdkError;
use crate::network;
use crate::shared::VsCurrency;
use std::fmt;
use std::time::Duration;

/// Env var holding the API key.
pub const ENV_API_KEY: &str = "COINGECKO_API_KEY";
/// Env var selecting the key tier: `demo` (default) or `pro`.
pub const ENV_API_TIER: &str = "COINGECKO_API_TIER";
/// Env var overriding the base URL.
pub const ENV_BASE_URL: &str = "COINGECKO_BASE_URL";
/// Env var setting the default quote currency.
pub const ENV_CURRENCY: &str = "COINGECKO_CURRENCY";

/// API credentials. Sent as a header, never logged.
#[derive(Clone, PartialEq, Eq)]
pub enum ApiKey {
    Demo(String),
    Pro(String),
}

impl ApiKey {
    pub fn header_name(&self) -> &'static str {
        match self {
            Self::Demo(_) => network::DEMO_KEY_HEADER,
            Self::Pro(_) => network::PRO_KEY_HEADER,
        }
    }

    pub(crate) fn value(&self) -> &str {
        match self {
            Self::Demo(k) | Self::Pro(k) => k,
        }
    }

    /// Base URL matching the key's tier.
    pub fn default_base_url(&self) -> &'static str {
        match self {
            Self::Demo(_) => network::DEFAULT_API_URL,
            Self::Pro(_) => network::PRO_API_URL,
        }
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Demo(_) => write!(f, "ApiKey::Demo(***)"),
            Self::Pro(_) => write!(f, "ApiKey::Pro(***)"),
        }
    }
}

/// Everything a `CoinTrackClient` needs besides its HTTP transport.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub api_key: Option<ApiKey>,
    /// Default quote currency for table and charts.
    pub currency: VsCurrency,
    /// Coins per market-table page.
    pub per_page: u32,
    /// TTL of the coin-detail cache.
    pub cache_ttl: Duration,
    /// Market-table auto-refresh interval.
    pub refresh_interval: Duration,
    /// Live-search debounce.
    pub search_debounce: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: network::DEFAULT_API_URL.to_string(),
            api_key: None,
            currency: VsCurrency::default(),
            per_page: network::DEFAULT_PER_PAGE,
            cache_ttl: Duration::from_secs(network::DEFAULT_CACHE_TTL_SECS),
            refresh_interval: Duration::from_secs(network::DEFAULT_REFRESH_SECS),
            search_debounce: Duration::from_millis(network::DEFAULT_SEARCH_DEBOUNCE_MS),
        }
    }
}

impl ClientConfig {
    /// Read `COINGECKO_*` variables from the process environment.
    pub fn from_env() -> Result<Self, SdkError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable lookup; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SdkError> {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(key) = get(ENV_API_KEY) {
            let tier = get(ENV_API_TIER).unwrap_or_else(|| "demo".to_string());
            let api_key = match tier.trim().to_lowercase().as_str() {
                "demo" => ApiKey::Demo(key),
                "pro" => ApiKey::Pro(key),
                other => {
                    return Err(SdkError::Validation(format!(
                        "{ENV_API_TIER} must be `demo` or `pro`, got `{other}`"
                    )))
                }
            };
            config.base_url = api_key.default_base_url().to_string();
            config.api_key = Some(api_key);
        }

        if let Some(url) = get(ENV_BASE_URL) {
            config.base_url = url;
        }

        if let Some(currency) = get(ENV_CURRENCY) {
            config.currency = currency.parse().map_err(SdkError::Validation)?;
        }

        Ok(config)
    }
}
