//! Wire types for the search endpoint (REST).

use serde::{Deserialize, Serialize};

/// A coin hit of `GET /search`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchCoinResponse {
    pub id: String,
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub thumb: Option<String>,
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
}

/// `GET /search` response. Exchanges, categories and NFTs are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub coins: Vec<SearchCoinResponse>,
}
