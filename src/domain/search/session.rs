//! Live search with debounce and explicit cancellation tokens.
//!
//! Every call to [`SearchSession::search`] takes a new generation token. A call
//! whose token is no longer the newest gives up with [`SdkError::Cancelled`],
//! both after the debounce delay and after the request returns, so results of a
//! superseded keystroke are never committed or returned.

use super::SearchHit;
use crate::error::SdkError;
use crate::network::DEFAULT_SEARCH_DEBOUNCE_MS;
use crate::source::MarketDataSource;

use async_lock::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Results committed by the newest completed search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResults {
    pub query: String,
    pub hits: Vec<SearchHit>,
}

/// A search box: one per input field, shared by reference between keystrokes.
pub struct SearchSession<S> {
    source: S,
    debounce: Duration,
    limit: Option<usize>,
    generation: Arc<AtomicU64>,
    committed: Arc<RwLock<SearchResults>>,
}

impl<S: MarketDataSource> SearchSession<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            debounce: Duration::from_millis(DEFAULT_SEARCH_DEBOUNCE_MS),
            limit: None,
            generation: Arc::new(AtomicU64::new(0)),
            committed: Arc::new(RwLock::new(SearchResults::default())),
        }
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Keep at most `limit` hits.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Search for `query` unless a newer keystroke arrives first.
    ///
    /// A blank query clears the committed results immediately and cancels any
    /// search still in flight.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchHit>, SdkError> {
        let token = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        if query.trim().is_empty() {
            *self.committed.write().await = SearchResults::default();
            return Ok(Vec::new());
        }

        futures_timer::Delay::new(self.debounce).await;
        if !self.is_current(token) {
            tracing::trace!(query, "Search superseded during debounce");
            return Err(SdkError::Cancelled);
        }

        let mut hits = self.source.search(query).await?;
        if let Some(limit) = self.limit {
            hits.truncate(limit);
        }

        let mut committed = self.committed.write().await;
        if !self.is_current(token) {
            tracing::trace!(query, "Search superseded in flight");
            return Err(SdkError::Cancelled);
        }
        *committed = SearchResults {
            query: query.to_string(),
            hits: hits.clone(),
        };
        Ok(hits)
    }

    /// Abandon any in-flight search (e.g. the search box was closed).
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Results of the newest search that completed.
    pub async fn latest(&self) -> SearchResults {
        self.committed.read().await.clone()
    }

    fn is_current(&self, token: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == token
    }
}
