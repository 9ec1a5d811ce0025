//! Stat cards shown under the comparison chart.

use super::CoinRef;
use crate::domain::coin::{CoinDetail, PriceTrend};
use crate::shared::fmt;
use crate::shared::VsCurrency;
use serde::Serialize;

/// Current figures of one compared coin in one currency.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonStat {
    pub coin: CoinRef,
    pub image: Option<String>,
    pub currency: VsCurrency,
    pub current_price: f64,
    pub price_change_24h: f64,
    pub trend: PriceTrend,
    pub market_cap: f64,
}

impl ComparisonStat {
    /// Missing figures read as 0.
    pub fn from_detail(detail: &CoinDetail, currency: VsCurrency) -> Self {
        let md = &detail.market_data;
        Self {
            coin: detail.coin_ref(),
            image: detail.image.best().map(str::to_string),
            currency,
            current_price: md.current_price(currency).unwrap_or_default(),
            price_change_24h: md.price_change_24h.unwrap_or_default(),
            trend: PriceTrend::from_change(md.price_change_24h),
            market_cap: md.market_cap(currency).unwrap_or_default(),
        }
    }

    pub fn price_display(&self) -> String {
        fmt::display(&self.current_price)
    }

    pub fn change_display(&self) -> String {
        fmt::display_percent(self.price_change_24h)
    }

    pub fn market_cap_display(&self) -> String {
        fmt::display(&self.market_cap)
    }
}
