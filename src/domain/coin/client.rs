//! Coins sub-client — market table, coin detail cache, auto-refresh.

use crate::client::CoinTrackClient;
use crate::domain::coin::{self, CoinDetail, CoinSnapshot, MarketCoin};
use crate::domain::market_chart::RawSeries;
use crate::error::SdkError;
use crate::shared::{CoinId, TimeFrame, VsCurrency};

use futures_util::Stream;
use serde::Serialize;
use std::time::{Duration, Instant};

/// The single-coin view: summary figures plus the raw history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPanel {
    pub snapshot: CoinSnapshot,
    pub series: RawSeries,
}

/// Sub-client for coin operations.
pub struct Coins<'a> {
    pub(crate) client: &'a CoinTrackClient,
}

impl<'a> Coins<'a> {
    /// One page of the market table, ordered by market cap. Pages start at 1.
    ///
    /// Entries that fail validation are logged and dropped.
    pub async fn list(&self, page: u32, currency: VsCurrency) -> Result<Vec<MarketCoin>, SdkError> {
        fetch_page(self.client, page, currency).await
    }

    /// Get a coin's detail. Uses TTL cache.
    pub async fn get(&self, id: &CoinId) -> Result<CoinDetail, SdkError> {
        {
            let cache = self.client.detail_cache.read().await;
            if let Some((detail, fetched_at)) = cache.get(id) {
                if fetched_at.elapsed() < self.client.config.cache_ttl {
                    tracing::trace!(coin = %id, "Coin detail cache hit");
                    return Ok(detail.clone());
                }
            }
        }

        let resp = self.client.http.get_coin(id).await?;
        let detail: CoinDetail = resp
            .try_into()
            .map_err(|e: coin::ValidationError| SdkError::Validation(e.to_string()))?;

        self.cache_detail(&detail).await;
        Ok(detail)
    }

    /// Store `detail`, dropping entries that have outlived the TTL.
    async fn cache_detail(&self, detail: &CoinDetail) {
        let ttl = self.client.config.cache_ttl;
        let mut cache = self.client.detail_cache.write().await;
        cache.retain(|_, (_, fetched_at)| fetched_at.elapsed() < ttl);
        cache.insert(detail.id.clone(), (detail.clone(), Instant::now()));
    }

    /// Re-fetch `page` every `interval`, yielding each result.
    ///
    /// The first fetch happens immediately. Errors are yielded, not fatal: the
    /// next tick tries again. Dropping the stream stops the refresh.
    pub fn watch(
        &self,
        page: u32,
        currency: VsCurrency,
        interval: Duration,
    ) -> impl Stream<Item = Result<Vec<MarketCoin>, SdkError>> + 'a {
        let client = self.client;
        async_stream::stream! {
            loop {
                yield fetch_page(client, page, currency).await;
                futures_timer::Delay::new(interval).await;
            }
        }
    }

    /// `watch` at the configured refresh interval.
    pub fn watch_default(
        &self,
        page: u32,
        currency: VsCurrency,
    ) -> impl Stream<Item = Result<Vec<MarketCoin>, SdkError>> + 'a {
        self.watch(page, currency, self.client.config.refresh_interval)
    }

    /// Detail and history of one coin, fetched concurrently.
    pub async fn chart(
        &self,
        id: &CoinId,
        currency: VsCurrency,
        time_frame: TimeFrame,
    ) -> Result<ChartPanel, SdkError> {
        let (detail, series) = futures_util::future::try_join(
            self.get(id),
            self.client.market_charts().get(id, currency, time_frame),
        )
        .await?;

        Ok(ChartPanel {
            snapshot: detail.snapshot(currency),
            series,
        })
    }

    /// Invalidate a cached coin detail.
    pub async fn invalidate(&self, id: &CoinId) {
        self.client.detail_cache.write().await.remove(id);
    }

    /// Clear the coin detail cache.
    pub async fn clear_cache(&self) {
        self.client.detail_cache.write().await.clear();
    }
}

async fn fetch_page(
    client: &CoinTrackClient,
    page: u32,
    currency: VsCurrency,
) -> Result<Vec<MarketCoin>, SdkError> {
    if page == 0 {
        return Err(SdkError::Validation("pages start at 1".into()));
    }

    let resp = client
        .http
        .get_coin_markets(currency, page, client.config.per_page)
        .await?;

    let coins = resp
        .into_iter()
        .filter_map(|entry| match MarketCoin::try_from(entry) {
            Ok(coin) => Some(coin),
            Err(e) => {
                tracing::debug!(error = %e, "Skipping invalid market entry");
                None
            }
        })
        .collect();
    Ok(coins)
}
