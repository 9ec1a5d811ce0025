//! The data-source seam between fetching and the pure core.
//!
//! `CoinTrackClient` implements [`MarketDataSource`] against the REST API; tests
//! and alternative transports implement it to feed the comparison and search
//! flows without a network.

use crate::domain::coin::CoinDetail;
use crate::domain::market_chart::RawSeries;
use crate::domain::search::SearchHit;
use crate::error::SdkError;
use crate::shared::{CoinId, TimeFrame, VsCurrency};

/// Anything that can deliver coin details, market charts and search hits.
#[allow(async_fn_in_trait)]
pub trait MarketDataSource {
    async fn coin_detail(&self, id: &CoinId) -> Result<CoinDetail, SdkError>;

    async fn market_chart(
        &self,
        id: &CoinId,
        currency: VsCurrency,
        time_frame: TimeFrame,
    ) -> Result<RawSeries, SdkError>;

    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, SdkError>;
}

impl<T: MarketDataSource + ?Sized> MarketDataSource for &T {
    async fn coin_detail(&self, id: &CoinId) -> Result<CoinDetail, SdkError> {
        (**self).coin_detail(id).await
    }

    async fn market_chart(
        &self,
        id: &CoinId,
        currency: VsCurrency,
        time_frame: TimeFrame,
    ) -> Result<RawSeries, SdkError> {
        (**self).market_chart(id, currency, time_frame).await
    }

    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, SdkError> {
        (**self).search(query).await
    }
}
