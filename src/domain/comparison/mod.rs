//! Comparison domain — multi-coin percentage-change charts.
//!
//! Rows are keyed by [`CoinId`] internally. Symbols only appear when a chart is
//! projected for presentation (`ComparisonChart::to_symbol_rows`), where shared
//! symbols are disambiguated instead of overwriting each other.

pub mod align;
#[cfg(feature = "http")]
pub mod client;
pub mod selection;
pub mod stats;

use crate::domain::market_chart::RawSeries;
use crate::shared::{CoinId, Symbol};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::collections::{BTreeMap, HashMap};

pub use align::{align, ComparisonAligner};
pub use selection::{CoinSelection, SelectionError, Toggle, MAX_COMPARE_COINS};
pub use stats::ComparisonStat;

/// Line colours, assigned to columns in selection order.
pub const COMPARISON_COLORS: [&str; 5] = ["#6366f1", "#8b5cf6", "#ec4899", "#f59e0b", "#10b981"];

/// Identity of a compared coin.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CoinRef {
    pub id: CoinId,
    pub symbol: Symbol,
    pub name: String,
}

impl CoinRef {
    pub fn new(id: impl Into<CoinId>, symbol: &str, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            symbol: Symbol::new(symbol),
            name: name.into(),
        }
    }

    /// `"Bitcoin (BTC)"`, the legend entry.
    pub fn display_name(&self) -> String {
        format!("{} ({})", self.name, self.symbol)
    }
}

/// One coin's fetched history, input to the aligner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinSeries {
    pub coin: CoinRef,
    pub series: RawSeries,
}

impl CoinSeries {
    pub fn new(coin: CoinRef, series: RawSeries) -> Self {
        Self { coin, series }
    }
}

/// A plotted line of the comparison chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    pub coin: CoinRef,
    /// Data key in projected rows: the symbol, or `"SYM (id)"` on collision.
    pub key: String,
    pub color: &'static str,
}

/// One aligned index of the comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    /// Label derived from the first coin's timestamp.
    pub date: String,
    /// The first coin's raw timestamp at this index.
    pub timestamp: i64,
    /// Percentage change from each coin's own first price. Sparse.
    pub values: BTreeMap<CoinId, f64>,
}

impl ComparisonRow {
    pub fn get(&self, id: &CoinId) -> Option<f64> {
        self.values.get(id).copied()
    }
}

/// Why a coin contributes no values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// First price is exactly zero.
    ZeroBaseline,
    /// First price is NaN or infinite.
    NonFiniteBaseline,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedCoin {
    pub id: CoinId,
    pub reason: SkipReason,
}

/// Output of the aligner.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ComparisonChart {
    pub columns: Vec<Column>,
    pub rows: Vec<ComparisonRow>,
    pub skipped: Vec<SkippedCoin>,
}

impl ComparisonChart {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn column(&self, id: &CoinId) -> Option<&Column> {
        self.columns.iter().find(|c| &c.coin.id == id)
    }

    /// Flat rows for a charting layer: `{date, timestamp, <key>: pct, ...}`.
    pub fn to_symbol_rows(&self) -> Vec<Map<String, Value>> {
        self.rows
            .iter()
            .map(|row| {
                let mut out = Map::new();
                out.insert("date".into(), Value::String(row.date.clone()));
                out.insert("timestamp".into(), Value::from(row.timestamp));
                for column in &self.columns {
                    let number = row.get(&column.coin.id).and_then(Number::from_f64);
                    if let Some(n) = number {
                        out.insert(column.key.clone(), Value::Number(n));
                    }
                }
                out
            })
            .collect()
    }
}

/// Build one column per distinct coin id, in first-seen order.
pub(crate) fn build_columns(results: &[CoinSeries]) -> Vec<Column> {
    let mut seen: Vec<&CoinRef> = Vec::new();
    for r in results {
        if !seen.iter().any(|c| c.id == r.coin.id) {
            seen.push(&r.coin);
        }
    }

    let mut symbol_counts: HashMap<&Symbol, usize> = HashMap::new();
    for coin in &seen {
        *symbol_counts.entry(&coin.symbol).or_default() += 1;
    }

    seen.iter()
        .enumerate()
        .map(|(i, coin)| {
            let key = if symbol_counts[&coin.symbol] > 1 {
                format!("{} ({})", coin.symbol, coin.id)
            } else {
                coin.symbol.to_string()
            };
            Column {
                coin: (*coin).clone(),
                key,
                color: COMPARISON_COLORS[i % COMPARISON_COLORS.len()],
            }
        })
        .collect()
}
