//! Single-coin chart points: projects one metric of a `RawSeries` into
//! `{date, <metric>}` points.

use super::RawSeries;
use crate::shared::labels::utc;
use crate::shared::{LabelStyle, Metric};
use chrono::FixedOffset;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// One plotted point of a single-coin chart.
///
/// Serializes as `{"date": "...", "<metric>": value}` so the metric name is the
/// data key the chart plots.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricPoint {
    pub date: String,
    pub metric: Metric,
    pub value: f64,
}

impl Serialize for MetricPoint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("date", &self.date)?;
        map.serialize_entry(self.metric.as_str(), &self.value)?;
        map.end()
    }
}

/// Projects a `RawSeries` metric into chart points.
///
/// Pure: inputs are borrowed, output is freshly allocated, values are copied
/// through untouched and in order.
#[derive(Debug, Clone, Copy)]
pub struct SeriesConverter {
    metric: Metric,
    style: Option<LabelStyle>,
    offset: FixedOffset,
}

impl SeriesConverter {
    pub fn new(metric: Metric) -> Self {
        Self {
            metric,
            style: None,
            offset: utc(),
        }
    }

    /// Force a label style instead of deriving it from the series span.
    pub fn with_style(mut self, style: LabelStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Render labels in this UTC offset.
    pub fn with_offset(mut self, offset: FixedOffset) -> Self {
        self.offset = offset;
        self
    }

    pub fn convert(&self, raw: &RawSeries) -> Vec<MetricPoint> {
        let points = raw.series(self.metric);
        let (Some(first), Some(last)) = (points.first(), points.last()) else {
            return Vec::new();
        };

        let span_ms = last.timestamp_ms.saturating_sub(first.timestamp_ms);
        let style = self
            .style
            .unwrap_or_else(|| LabelStyle::for_span_ms(span_ms));

        points
            .iter()
            .map(|p| MetricPoint {
                date: style.format_at(p.timestamp_ms, self.offset),
                metric: self.metric,
                value: p.value,
            })
            .collect()
    }
}

/// Convert one metric of `raw` into chart points with UTC labels.
pub fn convert(raw: &RawSeries, metric: Metric) -> Vec<MetricPoint> {
    SeriesConverter::new(metric).convert(raw)
}
