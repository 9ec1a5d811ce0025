//! High-level client — `CoinTrackClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, shared cache state, and accessor methods.

use crate::config::{ApiKey, ClientConfig};
use crate::domain::coin::client::Coins;
use crate::domain::coin::CoinDetail;
use crate::domain::comparison::client::Comparisons;
use crate::domain::market_chart::client::MarketCharts;
use crate::domain::market_chart::RawSeries;
use crate::domain::search::client::Search;
use crate::domain::search::{SearchHit, SearchSession};
use crate::error::SdkError;
use crate::http::{CoinGeckoHttp, RetryPolicy};
use crate::shared::{CoinId, TimeFrame, VsCurrency};
use crate::source::MarketDataSource;

use async_lock::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

// Re-export sub-client types for convenience.
pub use crate::domain::coin::client::Coins as CoinsClient;
pub use crate::domain::comparison::client::Comparisons as ComparisonsClient;
pub use crate::domain::market_chart::client::MarketCharts as MarketChartsClient;
pub use crate::domain::search::client::Search as SearchClient;

/// The primary entry point for talking to the pricing API.
///
/// Provides nested sub-client accessors for each domain:
/// `client.coins()`, `client.comparisons()`, etc.
#[derive(Clone)]
pub struct CoinTrackClient {
    pub(crate) http: CoinGeckoHttp,
    pub(crate) config: ClientConfig,
    /// Coin detail cache: id → (CoinDetail, fetched_at)
    pub(crate) detail_cache: Arc<RwLock<HashMap<CoinId, (CoinDetail, Instant)>>>,
}

impl CoinTrackClient {
    pub fn builder() -> CoinTrackClientBuilder {
        CoinTrackClientBuilder::default()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn coins(&self) -> Coins<'_> {
        Coins { client: self }
    }

    pub fn market_charts(&self) -> MarketCharts<'_> {
        MarketCharts { client: self }
    }

    pub fn comparisons(&self) -> Comparisons<'_> {
        Comparisons { client: self }
    }

    pub fn search(&self) -> Search<'_> {
        Search { client: self }
    }

    /// A debounced search box backed by this client.
    ///
    /// The session owns a clone of the client, so it can live as long as the
    /// input field it serves.
    pub fn search_session(&self) -> SearchSession<CoinTrackClient> {
        SearchSession::new(self.clone()).with_debounce(self.config.search_debounce)
    }

    /// Clear all HTTP caches.
    pub async fn clear_all_caches(&self) {
        self.detail_cache.write().await.clear();
    }
}

impl MarketDataSource for CoinTrackClient {
    async fn coin_detail(&self, id: &CoinId) -> Result<CoinDetail, SdkError> {
        self.coins().get(id).await
    }

    async fn market_chart(
        &self,
        id: &CoinId,
        currency: VsCurrency,
        time_frame: TimeFrame,
    ) -> Result<RawSeries, SdkError> {
        self.market_charts().get(id, currency, time_frame).await
    }

    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, SdkError> {
        Search { client: self }.query(query, None).await
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[derive(Default)]
pub struct CoinTrackClientBuilder {
    config: ClientConfig,
    base_url_set: bool,
    retry: Option<RetryPolicy>,
}

impl CoinTrackClientBuilder {
    /// Start from a complete config (e.g. `ClientConfig::from_env()`).
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self.base_url_set = true;
        self
    }

    /// Shorthand for `config(ClientConfig::from_env()?)`.
    pub fn from_env(self) -> Result<Self, SdkError> {
        Ok(self.config(ClientConfig::from_env()?))
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.config.base_url = url.to_string();
        self.base_url_set = true;
        self
    }

    /// Set the API key. Unless a base URL was set explicitly, the key's tier
    /// also selects the base URL.
    pub fn api_key(mut self, key: ApiKey) -> Self {
        if !self.base_url_set {
            self.config.base_url = key.default_base_url().to_string();
        }
        self.config.api_key = Some(key);
        self
    }

    pub fn currency(mut self, currency: VsCurrency) -> Self {
        self.config.currency = currency;
        self
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.config.per_page = per_page;
        self
    }

    pub fn cache_ttl(mut self, ttl: Duration) -> Self {
        self.config.cache_ttl = ttl;
        self
    }

    pub fn refresh_interval(mut self, interval: Duration) -> Self {
        self.config.refresh_interval = interval;
        self
    }

    pub fn search_debounce(mut self, debounce: Duration) -> Self {
        self.config.search_debounce = debounce;
        self
    }

    pub fn retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = Some(retry);
        self
    }

    pub fn build(self) -> Result<CoinTrackClient, SdkError> {
        if self.config.per_page == 0 {
            return Err(SdkError::Validation("per_page must be at least 1".into()));
        }

        let mut http = CoinGeckoHttp::new(&self.config.base_url, self.config.api_key.clone())?;
        if let Some(retry) = self.retry {
            http = http.with_retry(retry);
        }

        Ok(CoinTrackClient {
            http,
            config: self.config,
            detail_cache: Arc::new(RwLock::new(HashMap::new())),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network;

    #[test]
    fn test_builder_defaults() {
        let client = CoinTrackClient::builder().build().unwrap();
        assert_eq!(client.http.base_url(), network::DEFAULT_API_URL);
        assert_eq!(client.config().per_page, 20);
        assert_eq!(client.config().currency, VsCurrency::Usd);
    }

    #[test]
    fn test_pro_key_selects_pro_url() {
        let client = CoinTrackClient::builder()
            .api_key(ApiKey::Pro("k".into()))
            .build()
            .unwrap();
        assert_eq!(client.http.base_url(), network::PRO_API_URL);
    }

    #[test]
    fn test_explicit_base_url_kept_with_key() {
        let client = CoinTrackClient::builder()
            .base_url("http://localhost:9000/api/v3")
            .api_key(ApiKey::Pro("k".into()))
            .build()
            .unwrap();
        assert_eq!(client.http.base_url(), "http://localhost:9000/api/v3");
    }

    #[test]
    fn test_zero_per_page_rejected() {
        assert!(matches!(
            CoinTrackClient::builder().per_page(0).build(),
            Err(SdkError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_search_session_uses_configured_debounce() {
        let client = CoinTrackClient::builder()
            .search_debounce(Duration::from_millis(5))
            .build()
            .unwrap();
        let session = client.search_session();
        // blank queries resolve without touching the network
        assert!(session.search("").await.unwrap().is_empty());
    }
}
