//! Human-readable date labels for chart points.
//!
//! Labels use en-US month abbreviations and a 12-hour clock, rendered in a
//! fixed UTC offset so the same input always yields the same label.

use chrono::{DateTime, FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};

/// Granularity of a date label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelStyle {
    /// `"02:00 PM"`
    #[default]
    Time,
    /// `"Nov 14"`
    MonthDay,
    /// `"Nov 2023"`
    MonthYear,
}

impl LabelStyle {
    fn pattern(&self) -> &'static str {
        match self {
            Self::Time => "%I:%M %p",
            Self::MonthDay => "%b %-d",
            Self::MonthYear => "%b %Y",
        }
    }

    /// Pick a style from the span covered by a series.
    pub fn for_span_ms(span_ms: i64) -> Self {
        const DAY_MS: i64 = 24 * 60 * 60 * 1000;
        if span_ms <= DAY_MS {
            Self::Time
        } else if span_ms <= 31 * DAY_MS {
            Self::MonthDay
        } else {
            Self::MonthYear
        }
    }

    /// Format a Unix-millis timestamp in UTC.
    pub fn format(&self, timestamp_ms: i64) -> String {
        self.format_at(timestamp_ms, utc())
    }

    /// Format a Unix-millis timestamp in the given offset.
    ///
    /// Timestamps outside chrono's range fall back to the raw millis.
    pub fn format_at(&self, timestamp_ms: i64, offset: FixedOffset) -> String {
        match DateTime::<Utc>::from_timestamp_millis(timestamp_ms) {
            Some(dt) => dt.with_timezone(&offset).format(self.pattern()).to_string(),
            None => timestamp_ms.to_string(),
        }
    }
}

/// The zero offset.
pub fn utc() -> FixedOffset {
    Utc.fix()
}
