//! Market chart domain — raw per-coin history and single-coin chart points.

#[cfg(feature = "http")]
pub mod client;
pub mod series;
pub mod wire;

use crate::shared::Metric;
use serde::{Deserialize, Serialize};

pub use series::{convert, MetricPoint, SeriesConverter};

/// One `(timestamp, value)` observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Unix timestamp in milliseconds.
    pub timestamp_ms: i64,
    pub value: f64,
}

impl SeriesPoint {
    pub fn new(timestamp_ms: i64, value: f64) -> Self {
        Self {
            timestamp_ms,
            value,
        }
    }
}

impl From<(i64, f64)> for SeriesPoint {
    fn from((timestamp_ms, value): (i64, f64)) -> Self {
        Self::new(timestamp_ms, value)
    }
}

/// A coin's history over one time frame as three parallel sequences.
///
/// Index alignment across the three sequences is whatever the API delivered;
/// nothing here re-aligns them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSeries {
    pub prices: Vec<SeriesPoint>,
    pub market_caps: Vec<SeriesPoint>,
    pub total_volumes: Vec<SeriesPoint>,
}

impl RawSeries {
    /// Build a series with prices only.
    pub fn from_prices(prices: impl IntoIterator<Item = (i64, f64)>) -> Self {
        Self {
            prices: prices.into_iter().map(SeriesPoint::from).collect(),
            ..Self::default()
        }
    }

    pub fn series(&self, metric: Metric) -> &[SeriesPoint] {
        match metric {
            Metric::Prices => &self.prices,
            Metric::MarketCaps => &self.market_caps,
            Metric::TotalVolumes => &self.total_volumes,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty() && self.market_caps.is_empty() && self.total_volumes.is_empty()
    }

    /// Price at the start of the window.
    pub fn start_price(&self) -> Option<f64> {
        self.prices.first().map(|p| p.value)
    }

    /// Price at the end of the window.
    pub fn current_price(&self) -> Option<f64> {
        self.prices.last().map(|p| p.value)
    }

    pub fn high_price(&self) -> Option<f64> {
        self.prices.iter().map(|p| p.value).reduce(f64::max)
    }

    pub fn low_price(&self) -> Option<f64> {
        self.prices.iter().map(|p| p.value).reduce(f64::min)
    }

    /// Change from first to last price, in percent of the first.
    ///
    /// `None` when there is no usable (finite, non-zero) starting price.
    pub fn price_change_percent(&self) -> Option<f64> {
        let start = self.start_price()?;
        let end = self.current_price()?;
        if start == 0.0 || !start.is_finite() {
            return None;
        }
        Some((end - start) / start * 100.0)
    }
}

impl From<wire::MarketChartResponse> for RawSeries {
    fn from(w: wire::MarketChartResponse) -> Self {
        let points = |v: Vec<(i64, f64)>| v.into_iter().map(SeriesPoint::from).collect();
        Self {
            prices: points(w.prices),
            market_caps: points(w.market_caps),
            total_volumes: points(w.total_volumes),
        }
    }
}
