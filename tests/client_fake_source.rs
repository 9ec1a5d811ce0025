//! Comparison fetch flow against an in-memory data source.
//!
//! Run with:
//! ```bash
//! cargo test --test client_fake_source
//! ```

#![cfg(feature = "http")]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use cointrack::prelude::*;

struct FakeSource {
    coins: HashMap<CoinId, (CoinDetail, RawSeries)>,
    fail_chart_for: Option<CoinId>,
    requests: AtomicUsize,
}

impl FakeSource {
    fn new() -> Self {
        let mut coins = HashMap::new();
        for (id, symbol, name, price, prices) in [
            (
                "bitcoin",
                "btc",
                "Bitcoin",
                90.0,
                vec![(0, 100.0), (3_600_000, 110.0), (7_200_000, 90.0)],
            ),
            (
                "ethereum",
                "eth",
                "Ethereum",
                11.0,
                vec![(0, 10.0), (3_600_000, 11.0)],
            ),
        ] {
            let detail = CoinDetail {
                id: id.into(),
                symbol: symbol.into(),
                name: name.into(),
                image: CoinImage::default(),
                market_data: MarketData {
                    current_price: HashMap::from([("usd".to_string(), price)]),
                    market_cap: HashMap::from([("usd".to_string(), price * 1e6)]),
                    price_change_24h: Some(-1.25),
                    ..Default::default()
                },
            };
            coins.insert(CoinId::from(id), (detail, RawSeries::from_prices(prices)));
        }
        Self {
            coins,
            fail_chart_for: None,
            requests: AtomicUsize::new(0),
        }
    }

    fn failing_chart(mut self, id: &str) -> Self {
        self.fail_chart_for = Some(id.into());
        self
    }
}

impl MarketDataSource for FakeSource {
    async fn coin_detail(&self, id: &CoinId) -> Result<CoinDetail, SdkError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        self.coins
            .get(id)
            .map(|(detail, _)| detail.clone())
            .ok_or_else(|| HttpError::NotFound(id.to_string()).into())
    }

    async fn market_chart(
        &self,
        id: &CoinId,
        _currency: VsCurrency,
        _time_frame: TimeFrame,
    ) -> Result<RawSeries, SdkError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        if self.fail_chart_for.as_ref() == Some(id) {
            return Err(HttpError::ServerError {
                status: 503,
                body: "unavailable".into(),
            }
            .into());
        }
        self.coins
            .get(id)
            .map(|(_, series)| series.clone())
            .ok_or_else(|| HttpError::NotFound(id.to_string()).into())
    }

    async fn search(&self, _query: &str) -> Result<Vec<SearchHit>, SdkError> {
        Ok(Vec::new())
    }
}

fn selection(ids: &[&str]) -> CoinSelection {
    let mut selection = CoinSelection::new();
    for id in ids {
        selection.toggle(CoinId::from(*id)).unwrap();
    }
    selection
}

#[tokio::test]
async fn fetches_and_aligns_selected_coins() {
    let source = FakeSource::new();
    let view = ComparisonsClient::fetch_from(
        &source,
        &selection(&["bitcoin", "ethereum"]),
        VsCurrency::Usd,
        TimeFrame::Day,
    )
    .await
    .unwrap();

    assert_eq!(source.requests.load(Ordering::SeqCst), 4);
    assert_eq!(view.chart.len(), 2);
    assert_eq!(view.chart.rows[1].get(&"ethereum".into()), Some(10.0));
    assert_eq!(view.chart.columns[0].key, "BTC");
    assert_eq!(view.chart.columns[1].key, "ETH");

    assert_eq!(view.stats.len(), 2);
    assert_eq!(view.stats[0].coin.name, "Bitcoin");
    assert_eq!(view.stats[0].current_price, 90.0);
    assert_eq!(view.stats[1].trend, PriceTrend::Down);
    assert_eq!(view.time_frame, TimeFrame::Day);
}

#[tokio::test]
async fn one_failed_request_fails_the_comparison() {
    let source = FakeSource::new().failing_chart("ethereum");
    let err = fetch_comparison(
        &source,
        &["bitcoin".into(), "ethereum".into()],
        VsCurrency::Usd,
        TimeFrame::Week,
    )
    .await
    .unwrap_err();

    assert!(matches!(
        err,
        SdkError::Http(HttpError::ServerError { status: 503, .. })
    ));
}

#[tokio::test]
async fn unknown_coin_is_an_error() {
    let source = FakeSource::new();
    let err = fetch_comparison(
        &source,
        &["bitcoin".into(), "nope".into()],
        VsCurrency::Usd,
        TimeFrame::Week,
    )
    .await
    .unwrap_err();
    assert!(matches!(err, SdkError::Http(HttpError::NotFound(_))));
}

#[test]
fn empty_selection_makes_no_requests() {
    let source = FakeSource::new();
    let view = tokio_test::block_on(fetch_comparison(
        &source,
        &[],
        VsCurrency::Eur,
        TimeFrame::Month,
    ))
    .unwrap();

    assert!(view.chart.is_empty());
    assert!(view.stats.is_empty());
    assert_eq!(source.requests.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn search_session_over_fake_source() {
    let source = FakeSource::new();
    let session = SearchSession::new(&source).with_limit(COMPARISON_SEARCH_LIMIT);
    assert!(session.search("btc").await.unwrap().is_empty());
    assert_eq!(session.latest().await.query, "btc");
}
