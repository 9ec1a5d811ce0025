//! `wasm-bindgen` exports of the pure core.
//!
//! JSON in, JSON out: the web layer hands over what it fetched and gets chart
//! rows back, so no Rust types cross the boundary.

use crate::domain::comparison::{CoinRef, CoinSeries, ComparisonAligner};
use crate::domain::market_chart::wire::MarketChartResponse;
use crate::domain::market_chart::{RawSeries, SeriesConverter};
use crate::error::SdkError;
use crate::shared::{Metric, TimeFrame};

use serde::Deserialize;
use serde_json::{json, Value};
use wasm_bindgen::prelude::*;

/// One entry of the `alignComparison` input: a coin plus its market-chart
/// payload exactly as the REST endpoint returns it.
#[derive(Deserialize)]
struct CoinChartInput {
    coin: CoinRef,
    series: MarketChartResponse,
}

impl From<CoinChartInput> for CoinSeries {
    fn from(input: CoinChartInput) -> Self {
        CoinSeries::new(input.coin, RawSeries::from(input.series))
    }
}

/// Convert a market-chart JSON document into `[{date, <metric>: value}, ...]`.
#[wasm_bindgen(js_name = convertSeries)]
pub fn convert_json(raw: &str, metric: &str) -> Result<String, JsValue> {
    convert_str(raw, metric).map_err(to_js)
}

/// Align a JSON array of `{coin, series}` into `{columns, rows, skipped}`.
#[wasm_bindgen(js_name = alignComparison)]
pub fn align_json(results: &str, time_frame: u32) -> Result<String, JsValue> {
    align_str(results, time_frame).map_err(to_js)
}

fn to_js(e: SdkError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn convert_str(raw: &str, metric: &str) -> Result<String, SdkError> {
    let metric: Metric = metric.parse().map_err(SdkError::Validation)?;
    let raw: MarketChartResponse = serde_json::from_str(raw)?;
    let raw = RawSeries::from(raw);
    let points = SeriesConverter::new(metric).convert(&raw);
    Ok(serde_json::to_string(&points)?)
}

fn align_str(results: &str, time_frame: u32) -> Result<String, SdkError> {
    let time_frame = TimeFrame::try_from(time_frame).map_err(SdkError::Validation)?;
    let inputs: Vec<CoinChartInput> = serde_json::from_str(results)?;
    let results: Vec<CoinSeries> = inputs.into_iter().map(CoinSeries::from).collect();
    let chart = ComparisonAligner::new(time_frame).align(&results);

    let out: Value = json!({
        "columns": chart.columns,
        "rows": chart.to_symbol_rows(),
        "skipped": chart.skipped,
    });
    Ok(out.to_string())
}
