//! Comparisons sub-client — fetch every selected coin, then align.

use crate::client::CoinTrackClient;
use crate::domain::comparison::{
    CoinSelection, CoinSeries, ComparisonAligner, ComparisonChart, ComparisonStat,
};
use crate::error::SdkError;
use crate::shared::{CoinId, TimeFrame, VsCurrency};
use crate::source::MarketDataSource;

use futures_util::future::{try_join, try_join_all};
use serde::Serialize;

/// Everything the comparison view renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonView {
    pub chart: ComparisonChart,
    /// One stat card per coin, in selection order.
    pub stats: Vec<ComparisonStat>,
    pub currency: VsCurrency,
    pub time_frame: TimeFrame,
}

/// Sub-client for multi-coin comparisons.
pub struct Comparisons<'a> {
    pub(crate) client: &'a CoinTrackClient,
}

impl<'a> Comparisons<'a> {
    /// Fetch and align the selected coins.
    pub async fn fetch(
        &self,
        selection: &CoinSelection,
        currency: VsCurrency,
        time_frame: TimeFrame,
    ) -> Result<ComparisonView, SdkError> {
        fetch_comparison(self.client, selection.ids(), currency, time_frame).await
    }

    /// Same as `fetch`, against any data source.
    pub async fn fetch_from<S: MarketDataSource>(
        source: S,
        selection: &CoinSelection,
        currency: VsCurrency,
        time_frame: TimeFrame,
    ) -> Result<ComparisonView, SdkError> {
        fetch_comparison(&source, selection.ids(), currency, time_frame).await
    }
}

/// Fetch detail and history of every coin concurrently, then align.
///
/// All-or-nothing: the first failed request fails the whole comparison and no
/// partial chart is produced. An empty `ids` yields an empty view without any
/// request.
pub async fn fetch_comparison<S: MarketDataSource>(
    source: &S,
    ids: &[CoinId],
    currency: VsCurrency,
    time_frame: TimeFrame,
) -> Result<ComparisonView, SdkError> {
    let fetched = try_join_all(ids.iter().map(|id| {
        try_join(
            source.coin_detail(id),
            source.market_chart(id, currency, time_frame),
        )
    }))
    .await?;

    let stats = fetched
        .iter()
        .map(|(detail, _)| ComparisonStat::from_detail(detail, currency))
        .collect();
    let results: Vec<CoinSeries> = fetched
        .into_iter()
        .map(|(detail, series)| CoinSeries::new(detail.coin_ref(), series))
        .collect();

    let chart = ComparisonAligner::new(time_frame).align(&results);
    tracing::debug!(
        coins = results.len(),
        rows = chart.len(),
        time_frame = time_frame.days(),
        "Comparison fetched"
    );

    Ok(ComparisonView {
        chart,
        stats,
        currency,
        time_frame,
    })
}
