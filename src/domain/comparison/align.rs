//! Index alignment and self-relative percentage change across coins.
//!
//! Series are aligned by position, not by timestamp: index `i` of every coin is
//! treated as the same instant. This holds when every series was fetched with
//! the same time frame and currency, which is how the comparison view fetches
//! them. Coins with shorter histories truncate the whole comparison.

use super::{build_columns, CoinSeries, ComparisonChart, ComparisonRow, SkipReason, SkippedCoin};
use crate::shared::labels::utc;
use crate::shared::{CoinId, TimeFrame};
use chrono::FixedOffset;
use std::collections::BTreeMap;

/// Merges several coins' histories into one chartable series.
#[derive(Debug, Clone, Copy)]
pub struct ComparisonAligner {
    time_frame: TimeFrame,
    offset: FixedOffset,
}

impl ComparisonAligner {
    pub fn new(time_frame: TimeFrame) -> Self {
        Self {
            time_frame,
            offset: utc(),
        }
    }

    /// Render date labels in this UTC offset.
    pub fn with_offset(mut self, offset: FixedOffset) -> Self {
        self.offset = offset;
        self
    }

    pub fn align(&self, results: &[CoinSeries]) -> ComparisonChart {
        let Some(first) = results.first() else {
            return ComparisonChart::default();
        };

        let len = results
            .iter()
            .map(|r| r.series.prices.len())
            .min()
            .unwrap_or(0);
        if len == 0 {
            return ComparisonChart::default();
        }

        let mut skipped = Vec::new();
        let baselines: Vec<Option<f64>> = results
            .iter()
            .map(|r| {
                let base = r.series.prices[0].value;
                let reason = if !base.is_finite() {
                    Some(SkipReason::NonFiniteBaseline)
                } else if base == 0.0 {
                    Some(SkipReason::ZeroBaseline)
                } else {
                    None
                };
                match reason {
                    Some(reason) => {
                        tracing::warn!(
                            coin = %r.coin.id,
                            ?reason,
                            "Skipping coin without a usable baseline"
                        );
                        skipped.push(SkippedCoin {
                            id: r.coin.id.clone(),
                            reason,
                        });
                        None
                    }
                    None => Some(base),
                }
            })
            .collect();

        let style = self.time_frame.label_style();
        let rows = (0..len)
            .map(|i| {
                let timestamp = first.series.prices[i].timestamp_ms;
                let mut values: BTreeMap<CoinId, f64> = BTreeMap::new();
                for (r, base) in results.iter().zip(&baselines) {
                    let price = r.series.prices[i].value;
                    // a missing price leaves the key out of this row only
                    if let Some(base) = base.filter(|_| price.is_finite()) {
                        values.insert(r.coin.id.clone(), (price - base) / base * 100.0);
                    }
                }
                ComparisonRow {
                    date: style.format_at(timestamp, self.offset),
                    timestamp,
                    values,
                }
            })
            .collect();

        tracing::debug!(
            coins = results.len(),
            rows = len,
            time_frame = self.time_frame.days(),
            "Aligned comparison"
        );

        ComparisonChart {
            columns: build_columns(results),
            rows,
            skipped,
        }
    }
}

/// Align `results` with UTC date labels.
pub fn align(results: &[CoinSeries], time_frame: TimeFrame) -> ComparisonChart {
    ComparisonAligner::new(time_frame).align(results)
}
