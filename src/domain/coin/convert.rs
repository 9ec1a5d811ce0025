//! Conversion: coin wire types → domain types (TryFrom + validation).

use super::wire::{self, CoinDetailResponse, CoinMarketResponse};
use super::{CoinDetail, CoinImage, MarketCoin, MarketData, ValidationError};
use crate::shared::{CoinId, Symbol};
use std::collections::HashMap;

fn validate_identity(id: &str, symbol: &str, name: &str) -> Result<(), ValidationError> {
    let mut errors = Vec::new();
    if id.trim().is_empty() {
        errors.push(ValidationError::MissingId);
    }
    if symbol.trim().is_empty() {
        errors.push(ValidationError::MissingSymbol);
    }
    if name.trim().is_empty() {
        errors.push(ValidationError::MissingName);
    }

    match errors.len() {
        0 => Ok(()),
        1 => Err(errors.remove(0)),
        _ => Err(ValidationError::Multiple(id.to_string(), errors)),
    }
}

/// Drop `null` entries from a per-currency map.
fn present(map: HashMap<String, Option<f64>>) -> HashMap<String, f64> {
    map.into_iter()
        .filter_map(|(currency, value)| value.map(|v| (currency, v)))
        .collect()
}

impl TryFrom<CoinMarketResponse> for MarketCoin {
    type Error = ValidationError;

    fn try_from(source: CoinMarketResponse) -> Result<Self, Self::Error> {
        validate_identity(&source.id, &source.symbol, &source.name)?;

        Ok(Self {
            id: CoinId::new(source.id),
            symbol: Symbol::new(&source.symbol),
            name: source.name,
            image: source.image,
            current_price: source.current_price,
            market_cap: source.market_cap,
            market_cap_rank: source.market_cap_rank,
            total_volume: source.total_volume,
            price_change_24h: source.price_change_percentage_24h,
            ath: source.ath,
        })
    }
}

impl From<wire::ImageResponse> for CoinImage {
    fn from(i: wire::ImageResponse) -> Self {
        Self {
            thumb: i.thumb,
            small: i.small,
            large: i.large,
        }
    }
}

impl From<wire::MarketDataResponse> for MarketData {
    fn from(m: wire::MarketDataResponse) -> Self {
        Self {
            current_price: present(m.current_price),
            ath: present(m.ath),
            market_cap: present(m.market_cap),
            total_volume: present(m.total_volume),
            price_change_24h: m.price_change_percentage_24h,
        }
    }
}

impl TryFrom<CoinDetailResponse> for CoinDetail {
    type Error = ValidationError;

    fn try_from(source: CoinDetailResponse) -> Result<Self, Self::Error> {
        validate_identity(&source.id, &source.symbol, &source.name)?;

        Ok(Self {
            id: CoinId::new(source.id),
            symbol: Symbol::new(&source.symbol),
            name: source.name,
            image: source.image.map(CoinImage::from).unwrap_or_default(),
            market_data: source.market_data.map(MarketData::from).unwrap_or_default(),
        })
    }
}
