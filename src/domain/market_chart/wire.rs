//! Wire types for the market-chart endpoint (REST).

use crate::shared::serde_util::series_pairs;
use serde::{Deserialize, Serialize};

/// `GET /coins/{id}/market_chart` response.
///
/// Three parallel `[timestamp_ms, value]` sequences, ascending by timestamp.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketChartResponse {
    #[serde(default, with = "series_pairs")]
    pub prices: Vec<(i64, f64)>,
    #[serde(default, with = "series_pairs")]
    pub market_caps: Vec<(i64, f64)>,
    #[serde(default, with = "series_pairs")]
    pub total_volumes: Vec<(i64, f64)>,
}
