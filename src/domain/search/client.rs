//! Search sub-client.

use crate::client::CoinTrackClient;
use crate::domain::search::SearchHit;
use crate::error::SdkError;

/// Sub-client for coin search.
pub struct Search<'a> {
    pub(crate) client: &'a CoinTrackClient,
}

impl<'a> Search<'a> {
    /// Coins matching `query`, at most `limit` when given.
    ///
    /// A blank query returns nothing without a request.
    pub async fn query(&self, query: &str, limit: Option<usize>) -> Result<Vec<SearchHit>, SdkError> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }

        let resp = self.client.http.search(query).await?;
        let mut hits: Vec<SearchHit> = resp.coins.into_iter().map(SearchHit::from).collect();
        if let Some(limit) = limit {
            hits.truncate(limit);
        }
        tracing::debug!(query, hits = hits.len(), "Search complete");
        Ok(hits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_blank_query_skips_request() {
        let client = CoinTrackClient::builder()
            .base_url("http://127.0.0.1:9/api/v3")
            .build()
            .unwrap();
        let hits = client.search().query("  \t", Some(10)).await.unwrap();
        assert!(hits.is_empty());
    }
}
