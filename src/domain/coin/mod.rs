//! Coin domain — market table entries, coin details, display helpers.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::domain::comparison::CoinRef;
use crate::shared::{CoinId, Symbol, VsCurrency};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// ─── Trend ───────────────────────────────────────────────────────────────────

/// Direction of a 24h change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceTrend {
    Up,
    Down,
    Flat,
    Unknown,
}

impl PriceTrend {
    pub fn from_change(change: Option<f64>) -> Self {
        match change {
            Some(c) if c.is_nan() => Self::Unknown,
            Some(c) if c > 0.0 => Self::Up,
            Some(c) if c < 0.0 => Self::Down,
            Some(_) => Self::Flat,
            None => Self::Unknown,
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            Self::Up => "↗",
            Self::Down => "↘",
            Self::Flat | Self::Unknown => "→",
        }
    }
}

/// Badge for large 24h moves in either direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Momentum {
    /// More than 5%.
    Moving,
    /// More than 10%.
    Surging,
}

impl Momentum {
    pub fn from_change(change: Option<f64>) -> Option<Self> {
        let magnitude = change?.abs();
        if magnitude > 10.0 {
            Some(Self::Surging)
        } else if magnitude > 5.0 {
            Some(Self::Moving)
        } else {
            None
        }
    }
}

// ─── MarketCoin ──────────────────────────────────────────────────────────────

/// A row of the market table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketCoin {
    pub id: CoinId,
    pub symbol: Symbol,
    pub name: String,
    pub image: Option<String>,
    pub current_price: Option<f64>,
    pub market_cap: Option<f64>,
    pub market_cap_rank: Option<u32>,
    pub total_volume: Option<f64>,
    pub price_change_24h: Option<f64>,
    pub ath: Option<f64>,
}

impl MarketCoin {
    pub fn coin_ref(&self) -> CoinRef {
        CoinRef {
            id: self.id.clone(),
            symbol: self.symbol.clone(),
            name: self.name.clone(),
        }
    }

    pub fn trend(&self) -> PriceTrend {
        PriceTrend::from_change(self.price_change_24h)
    }

    pub fn momentum(&self) -> Option<Momentum> {
        Momentum::from_change(self.price_change_24h)
    }

    /// Chart-panel summary using this row's figures.
    pub fn snapshot(&self, currency: VsCurrency) -> CoinSnapshot {
        CoinSnapshot {
            coin: self.coin_ref(),
            image: self.image.clone(),
            currency,
            current_price: self.current_price.unwrap_or_default(),
            ath: self.ath.unwrap_or_default(),
            market_cap: self.market_cap.unwrap_or_default(),
        }
    }
}

// ─── CoinDetail ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoinImage {
    pub thumb: Option<String>,
    pub small: Option<String>,
    pub large: Option<String>,
}

impl CoinImage {
    /// Largest available image.
    pub fn best(&self) -> Option<&str> {
        self.large
            .as_deref()
            .or(self.small.as_deref())
            .or(self.thumb.as_deref())
    }
}

/// Market figures keyed by lowercase currency code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketData {
    pub current_price: HashMap<String, f64>,
    pub ath: HashMap<String, f64>,
    pub market_cap: HashMap<String, f64>,
    pub total_volume: HashMap<String, f64>,
    pub price_change_24h: Option<f64>,
}

impl MarketData {
    pub fn current_price(&self, currency: VsCurrency) -> Option<f64> {
        self.current_price.get(currency.as_str()).copied()
    }

    pub fn ath(&self, currency: VsCurrency) -> Option<f64> {
        self.ath.get(currency.as_str()).copied()
    }

    pub fn market_cap(&self, currency: VsCurrency) -> Option<f64> {
        self.market_cap.get(currency.as_str()).copied()
    }

    pub fn total_volume(&self, currency: VsCurrency) -> Option<f64> {
        self.total_volume.get(currency.as_str()).copied()
    }
}

/// Full coin detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinDetail {
    pub id: CoinId,
    pub symbol: Symbol,
    pub name: String,
    pub image: CoinImage,
    pub market_data: MarketData,
}

impl CoinDetail {
    pub fn coin_ref(&self) -> CoinRef {
        CoinRef {
            id: self.id.clone(),
            symbol: self.symbol.clone(),
            name: self.name.clone(),
        }
    }

    /// Chart-panel summary for one currency; missing figures read as 0.
    pub fn snapshot(&self, currency: VsCurrency) -> CoinSnapshot {
        let md = &self.market_data;
        CoinSnapshot {
            coin: self.coin_ref(),
            image: self.image.best().map(str::to_string),
            currency,
            current_price: md.current_price(currency).unwrap_or_default(),
            ath: md.ath(currency).unwrap_or_default(),
            market_cap: md.market_cap(currency).unwrap_or_default(),
        }
    }
}

// ─── CoinSnapshot ────────────────────────────────────────────────────────────

/// Figures shown beside a single-coin chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinSnapshot {
    pub coin: CoinRef,
    pub image: Option<String>,
    pub currency: VsCurrency,
    pub current_price: f64,
    pub ath: f64,
    pub market_cap: f64,
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum ValidationError {
    Multiple(String, Vec<ValidationError>),
    MissingId,
    MissingSymbol,
    MissingName,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Multiple(id, errors) => {
                writeln!(f, "Coin validation errors ({id}):")?;
                for err in errors {
                    writeln!(f, "  - {}", err)?;
                }
                Ok(())
            }
            ValidationError::MissingId => write!(f, "Missing id"),
            ValidationError::MissingSymbol => write!(f, "Missing symbol"),
            ValidationError::MissingName => write!(f, "Missing name"),
        }
    }
}

impl std::error::Error for ValidationError {}
