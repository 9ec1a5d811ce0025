//! Low-level HTTP client — `CoinGeckoHttp`.
//!
//! One method per API endpoint. Returns wire types (conversion to domain types
//! happens in the sub-clients). `CoinTrackClient` wraps this.

use crate::config::ApiKey;
use crate::domain::coin::wire::{CoinDetailResponse, CoinMarketResponse};
use crate::domain::market_chart::wire::MarketChartResponse;
use crate::domain::search::wire::SearchResponse;
use crate::error::HttpError;
use crate::http::retry::{RetryConfig, RetryPolicy};
use crate::shared::{CoinId, TimeFrame, VsCurrency};

use reqwest::Client;
use serde::de::DeserializeOwned;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

/// Low-level HTTP client for the CoinGecko REST API.
#[derive(Clone)]
pub struct CoinGeckoHttp {
    base_url: String,
    client: Client,
    /// Sent as a header on every request. NEVER exposed publicly.
    api_key: Option<ApiKey>,
    retry: RetryPolicy,
}

impl CoinGeckoHttp {
    pub fn new(base_url: &str, api_key: Option<ApiKey>) -> Result<Self, HttpError> {
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder
                .timeout(Duration::from_secs(30))
                .pool_max_idle_per_host(10);
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build()?,
            api_key,
            retry: RetryPolicy::Idempotent,
        })
    }

    /// Override the retry policy used for every GET.
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── URLs ─────────────────────────────────────────────────────────────

    pub fn coin_markets_url(&self, currency: VsCurrency, page: u32, per_page: u32) -> String {
        format!(
            "{}/coins/markets?vs_currency={}&order=market_cap_desc&per_page={}&page={}&sparkline=false",
            self.base_url,
            currency.as_str(),
            per_page,
            page
        )
    }

    pub fn coin_url(&self, id: &CoinId) -> String {
        format!(
            "{}/coins/{}?localization=false&tickers=false&community_data=false&developer_data=false",
            self.base_url,
            urlencoding::encode(id.as_str())
        )
    }

    pub fn market_chart_url(
        &self,
        id: &CoinId,
        currency: VsCurrency,
        time_frame: TimeFrame,
    ) -> String {
        format!(
            "{}/coins/{}/market_chart?vs_currency={}&days={}",
            self.base_url,
            urlencoding::encode(id.as_str()),
            currency.as_str(),
            time_frame.days()
        )
    }

    pub fn search_url(&self, query: &str) -> String {
        format!(
            "{}/search?query={}",
            self.base_url,
            urlencoding::encode(query.trim())
        )
    }

    // ── Coins ────────────────────────────────────────────────────────────

    pub async fn get_coin_markets(
        &self,
        currency: VsCurrency,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<CoinMarketResponse>, HttpError> {
        let url = self.coin_markets_url(currency, page, per_page);
        self.get(&url).await
    }

    pub async fn get_coin(&self, id: &CoinId) -> Result<CoinDetailResponse, HttpError> {
        let url = self.coin_url(id);
        self.get(&url).await
    }

    // ── Market Chart ─────────────────────────────────────────────────────

    pub async fn get_market_chart(
        &self,
        id: &CoinId,
        currency: VsCurrency,
        time_frame: TimeFrame,
    ) -> Result<MarketChartResponse, HttpError> {
        let url = self.market_chart_url(id, currency, time_frame);
        self.get(&url).await
    }

    // ── Search ───────────────────────────────────────────────────────────

    pub async fn search(&self, query: &str) -> Result<SearchResponse, HttpError> {
        let url = self.search_url(query);
        self.get(&url).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        let config = match &self.retry {
            RetryPolicy::None => {
                return self.do_get(url).await;
            }
            RetryPolicy::Idempotent => RetryConfig::idempotent(),
            RetryPolicy::Custom(c) => c.clone(),
        };

        let mut last_error = None;

        for attempt in 0..=config.max_retries {
            match self.do_get::<T>(url).await {
                Ok(resp) => return Ok(resp),
                Err(e) => {
                    if config.should_retry(&e) && attempt < config.max_retries {
                        let delay = config.delay_after(&e, attempt);
                        tracing::debug!(
                            attempt = attempt + 1,
                            max = config.max_retries,
                            delay_ms = delay.as_millis() as u64,
                            error = %e,
                            "Retrying request to {}",
                            url
                        );
                        futures_timer::Delay::new(delay).await;
                        last_error = Some(e);
                    } else {
                        return Err(e);
                    }
                }
            }
        }

        Err(HttpError::MaxRetriesExceeded {
            attempts: config.max_retries + 1,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }

    async fn do_get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        let mut req = self.client.get(url).header("accept", "application/json");
        if let Some(key) = &self.api_key {
            req = req.header(key.header_name(), key.value());
        }

        tracing::trace!("GET {}", url);
        let resp = req.send().await?;
        let status = resp.status();

        if status.is_success() {
            let parsed = resp.json::<T>().await?;
            return Ok(parsed);
        }

        let retry_after_ms = resp
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(parse_retry_after_ms);
        let status_code = status.as_u16();
        let body_text = resp.text().await.unwrap_or_default();

        Err(classify_status(status_code, body_text, retry_after_ms))
    }
}

/// `Retry-After` in delay-seconds form.
fn parse_retry_after_ms(value: &str) -> Option<u64> {
    value.trim().parse::<u64>().ok().map(|secs| secs.saturating_mul(1000))
}

fn classify_status(status: u16, body: String, retry_after_ms: Option<u64>) -> HttpError {
    match status {
        401 | 403 => HttpError::Unauthorized(body),
        404 => HttpError::NotFound(body),
        408 => HttpError::Timeout,
        429 => HttpError::RateLimited { retry_after_ms },
        400..=499 => HttpError::BadRequest(body),
        _ => HttpError::ServerError { status, body },
    }
}
