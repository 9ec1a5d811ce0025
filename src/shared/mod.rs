//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw format the API sends, so they can be used directly in wire types
//! without conversion overhead.

pub mod fmt;
pub mod labels;
pub mod serde_util;

pub use labels::LabelStyle;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── CoinId ──────────────────────────────────────────────────────────────────

/// Newtype for API coin identifiers (e.g. `"bitcoin"`, `"usd-coin"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CoinId(String);

impl CoinId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CoinId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CoinId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for CoinId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for CoinId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(CoinId(s.to_string()))
    }
}

impl Serialize for CoinId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for CoinId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(CoinId(s))
    }
}

// ─── Symbol ──────────────────────────────────────────────────────────────────

/// Uppercase ticker symbol (e.g. `"BTC"`).
///
/// The API sends lowercase tickers; every constructor uppercases so two
/// symbols compare equal exactly when the dashboard would show the same label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(s: &str) -> Self {
        Self(s.to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Self::new(&s)
    }
}

impl Serialize for Symbol {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Symbol {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Symbol::new(&s))
    }
}

// ─── VsCurrency ──────────────────────────────────────────────────────────────

/// Quote currency for prices, market caps and volumes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VsCurrency {
    #[default]
    Usd,
    Eur,
    Jpy,
}

impl VsCurrency {
    pub const ALL: [VsCurrency; 3] = [VsCurrency::Usd, VsCurrency::Eur, VsCurrency::Jpy];

    /// The lowercase code the API expects in `vs_currency` and uses as map key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Usd => "usd",
            Self::Eur => "eur",
            Self::Jpy => "jpy",
        }
    }
}

impl std::fmt::Display for VsCurrency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str().to_uppercase())
    }
}

impl FromStr for VsCurrency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "usd" => Ok(Self::Usd),
            "eur" => Ok(Self::Eur),
            "jpy" => Ok(Self::Jpy),
            other => Err(format!("Unsupported currency: {other}")),
        }
    }
}

// ─── TimeFrame ───────────────────────────────────────────────────────────────

/// Historical window requested from the market-chart endpoint.
///
/// Controls both the density of the returned series and the date-label
/// granularity of comparison rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TimeFrame {
    Day,
    #[default]
    Week,
    Month,
    Year,
}

impl TimeFrame {
    /// Selector order.
    pub const ALL: [TimeFrame; 4] = [
        TimeFrame::Day,
        TimeFrame::Week,
        TimeFrame::Month,
        TimeFrame::Year,
    ];

    pub fn days(&self) -> u32 {
        match self {
            Self::Day => 1,
            Self::Week => 7,
            Self::Month => 30,
            Self::Year => 365,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Day => "1 Day",
            Self::Week => "1 Week",
            Self::Month => "1 Month",
            Self::Year => "1 Year",
        }
    }

    /// Date-label granularity for rows in this window.
    pub fn label_style(&self) -> LabelStyle {
        match self {
            Self::Day => LabelStyle::Time,
            Self::Week | Self::Month => LabelStyle::MonthDay,
            Self::Year => LabelStyle::MonthYear,
        }
    }
}

impl TryFrom<u32> for TimeFrame {
    type Error = String;

    fn try_from(days: u32) -> Result<Self, Self::Error> {
        match days {
            1 => Ok(Self::Day),
            7 => Ok(Self::Week),
            30 => Ok(Self::Month),
            365 => Ok(Self::Year),
            other => Err(format!("Unsupported time frame: {other} days")),
        }
    }
}

impl std::fmt::Display for TimeFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Serialize for TimeFrame {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(self.days())
    }
}

impl<'de> Deserialize<'de> for TimeFrame {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let days = u32::deserialize(deserializer)?;
        TimeFrame::try_from(days).map_err(serde::de::Error::custom)
    }
}

// ─── Metric ──────────────────────────────────────────────────────────────────

/// Which of the three parallel market-chart sequences to plot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    #[default]
    Prices,
    MarketCaps,
    TotalVolumes,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Prices, Metric::MarketCaps, Metric::TotalVolumes];

    /// Field name used both in the API payload and in converted points.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Prices => "prices",
            Self::MarketCaps => "market_caps",
            Self::TotalVolumes => "total_volumes",
        }
    }

    /// Button caption in the chart panel.
    pub fn caption(&self) -> &'static str {
        match self {
            Self::Prices => "Prices",
            Self::MarketCaps => "Market Caps",
            Self::TotalVolumes => "Total Volumes",
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Metric {
    type Err = String;

    /// Accepts field names and captions (`"Market Caps"` → `market_caps`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(' ', "_").as_str() {
            "prices" => Ok(Self::Prices),
            "market_caps" => Ok(Self::MarketCaps),
            "total_volumes" => Ok(Self::TotalVolumes),
            other => Err(format!("Unknown metric: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coin_id_serde() {
        let id = CoinId::from("bitcoin");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"bitcoin\"");
        let back: CoinId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }

    #[test]
    fn test_symbol_uppercases() {
        assert_eq!(Symbol::new("btc").as_str(), "BTC");
        let s: Symbol = serde_json::from_str("\"eth\"").unwrap();
        assert_eq!(s, Symbol::from("ETH"));
    }

    #[test]
    fn test_currency_parse_and_serde() {
        assert_eq!("USD".parse::<VsCurrency>().unwrap(), VsCurrency::Usd);
        assert_eq!(" jpy ".parse::<VsCurrency>().unwrap(), VsCurrency::Jpy);
        assert!("gbp".parse::<VsCurrency>().is_err());
        assert_eq!(serde_json::to_string(&VsCurrency::Eur).unwrap(), "\"eur\"");
    }

    #[test]
    fn test_time_frame_days_round_trip() {
        for tf in TimeFrame::ALL {
            assert_eq!(TimeFrame::try_from(tf.days()).unwrap(), tf);
        }
        assert!(TimeFrame::try_from(90).is_err());
        assert_eq!(TimeFrame::default(), TimeFrame::Week);
    }

    #[test]
    fn test_time_frame_serde_as_days() {
        assert_eq!(serde_json::to_string(&TimeFrame::Year).unwrap(), "365");
        let tf: TimeFrame = serde_json::from_str("30").unwrap();
        assert_eq!(tf, TimeFrame::Month);
        assert!(serde_json::from_str::<TimeFrame>("14").is_err());
    }

    #[test]
    fn test_time_frame_label_style() {
        assert_eq!(TimeFrame::Day.label_style(), LabelStyle::Time);
        assert_eq!(TimeFrame::Week.label_style(), LabelStyle::MonthDay);
        assert_eq!(TimeFrame::Month.label_style(), LabelStyle::MonthDay);
        assert_eq!(TimeFrame::Year.label_style(), LabelStyle::MonthYear);
    }

    #[test]
    fn test_metric_from_caption() {
        assert_eq!("Market Caps".parse::<Metric>().unwrap(), Metric::MarketCaps);
        assert_eq!("total_volumes".parse::<Metric>().unwrap(), Metric::TotalVolumes);
        assert_eq!("Prices".parse::<Metric>().unwrap(), Metric::Prices);
        assert!("candles".parse::<Metric>().is_err());
    }

    #[test]
    fn test_metric_serde() {
        assert_eq!(
            serde_json::to_string(&Metric::MarketCaps).unwrap(),
            "\"market_caps\""
        );
    }
}
