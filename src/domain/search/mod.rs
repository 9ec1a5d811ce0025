//! Search domain — coin lookup by name or symbol.

#[cfg(feature = "http")]
pub mod client;
#[cfg(feature = "http")]
pub mod session;
pub mod wire;

use crate::domain::comparison::CoinRef;
use crate::shared::{CoinId, Symbol};
use serde::{Deserialize, Serialize};

#[cfg(feature = "http")]
pub use session::SearchSession;

/// Results shown in the comparison picker.
pub const COMPARISON_SEARCH_LIMIT: usize = 10;

/// A search result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub id: CoinId,
    pub symbol: Symbol,
    pub name: String,
    pub thumb: Option<String>,
    pub market_cap_rank: Option<u32>,
}

impl SearchHit {
    pub fn coin_ref(&self) -> CoinRef {
        CoinRef {
            id: self.id.clone(),
            symbol: self.symbol.clone(),
            name: self.name.clone(),
        }
    }
}

impl From<wire::SearchCoinResponse> for SearchHit {
    fn from(c: wire::SearchCoinResponse) -> Self {
        Self {
            id: CoinId::new(c.id),
            symbol: Symbol::new(&c.symbol),
            name: c.name,
            thumb: c.thumb,
            market_cap_rank: c.market_cap_rank,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_response_conversion() {
        let json = r#"{
            "coins": [
                {"id": "bitcoin", "name": "Bitcoin", "api_symbol": "bitcoin", "symbol": "BTC",
                 "market_cap_rank": 1, "thumb": "https://x/thumb/bitcoin.png", "large": "l"},
                {"id": "wrapped-bitcoin", "name": "Wrapped Bitcoin", "symbol": "wbtc",
                 "market_cap_rank": null, "thumb": null}
            ],
            "exchanges": [],
            "nfts": []
        }"#;
        let resp: wire::SearchResponse = serde_json::from_str(json).unwrap();
        let hits: Vec<SearchHit> = resp.coins.into_iter().map(SearchHit::from).collect();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].market_cap_rank, Some(1));
        assert_eq!(hits[1].symbol.as_str(), "WBTC");
        assert_eq!(hits[1].thumb, None);
        assert_eq!(hits[1].coin_ref().name, "Wrapped Bitcoin");
    }

    #[test]
    fn test_missing_coins_is_empty() {
        let resp: wire::SearchResponse = serde_json::from_str(r#"{"exchanges": []}"#).unwrap();
        assert!(resp.coins.is_empty());
    }
}
