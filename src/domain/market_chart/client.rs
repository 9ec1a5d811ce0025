//! Market chart sub-client.

use crate::client::CoinTrackClient;
use crate::domain::market_chart::{MetricPoint, RawSeries, SeriesConverter};
use crate::error::SdkError;
use crate::shared::{CoinId, Metric, TimeFrame, VsCurrency};

/// Sub-client for historical chart data.
pub struct MarketCharts<'a> {
    pub(crate) client: &'a CoinTrackClient,
}

impl<'a> MarketCharts<'a> {
    /// Raw history of one coin over `time_frame`.
    pub async fn get(
        &self,
        id: &CoinId,
        currency: VsCurrency,
        time_frame: TimeFrame,
    ) -> Result<RawSeries, SdkError> {
        let resp = self
            .client
            .http
            .get_market_chart(id, currency, time_frame)
            .await?;
        Ok(resp.into())
    }

    /// Fetch and convert one metric, labelled for the time frame.
    pub async fn points(
        &self,
        id: &CoinId,
        currency: VsCurrency,
        time_frame: TimeFrame,
        metric: Metric,
    ) -> Result<Vec<MetricPoint>, SdkError> {
        let raw = self.get(id, currency, time_frame).await?;
        Ok(SeriesConverter::new(metric)
            .with_style(time_frame.label_style())
            .convert(&raw))
    }
}
