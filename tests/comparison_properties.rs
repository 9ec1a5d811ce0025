//! Behavioural tests of the pure core through the public API.
//!
//! Run with:
//! ```bash
//! cargo test --test comparison_properties
//! ```

use cointrack::domain::market_chart::wire::MarketChartResponse;
use cointrack::prelude::*;

fn coin(id: &str, symbol: &str, prices: &[(i64, f64)]) -> CoinSeries {
    CoinSeries::new(
        CoinRef::new(id, symbol, id),
        RawSeries::from_prices(prices.iter().copied()),
    )
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn btc_eth() -> Vec<CoinSeries> {
    vec![
        coin(
            "bitcoin",
            "btc",
            &[(0, 100.0), (3_600_000, 110.0), (7_200_000, 90.0)],
        ),
        coin("ethereum", "eth", &[(0, 10.0), (3_600_000, 11.0)]),
    ]
}

#[test]
fn two_coin_hourly_comparison() {
    let chart = align(&btc_eth(), TimeFrame::Day);
    let btc = CoinId::from("bitcoin");
    let eth = CoinId::from("ethereum");

    assert_eq!(chart.len(), 2);
    assert_eq!(chart.rows[0].get(&btc), Some(0.0));
    assert_eq!(chart.rows[0].get(&eth), Some(0.0));
    assert!(close(chart.rows[1].get(&btc).unwrap(), 10.0));
    assert!(close(chart.rows[1].get(&eth).unwrap(), 10.0));
    assert_eq!(chart.rows[1].timestamp, 3_600_000);
    assert_eq!(chart.rows[1].date, "01:00 AM");

    let rows = chart.to_symbol_rows();
    assert_eq!(rows[0]["BTC"], 0.0);
    assert_eq!(rows[0]["ETH"], 0.0);
    assert_eq!(rows[1]["date"], "01:00 AM");
}

#[test]
fn single_coin_prices_with_clock_labels() {
    let raw = RawSeries::from_prices([(1_700_000_000_000, 50.0), (1_700_003_600_000, 55.0)]);
    let points = convert(&raw, Metric::Prices);

    assert_eq!(points.len(), 2);
    assert_eq!(points[0].date, "10:13 PM");
    assert_eq!(points[1].date, "11:13 PM");

    let json = serde_json::to_value(&points).unwrap();
    assert_eq!(json[0]["prices"], 50.0);
    assert_eq!(json[1]["prices"], 55.0);
}

#[test]
fn row_count_is_shortest_series() {
    let cases: &[&[usize]] = &[&[1], &[3, 2], &[5, 5, 5], &[10, 4, 7, 9], &[2, 8, 3, 6, 1]];
    for lengths in cases {
        let results: Vec<CoinSeries> = lengths
            .iter()
            .enumerate()
            .map(|(c, &len)| {
                let prices: Vec<(i64, f64)> = (0..len)
                    .map(|i| (i as i64 * 60_000, 1.0 + (c * 7 + i) as f64))
                    .collect();
                coin(&format!("coin-{c}"), &format!("c{c}"), &prices)
            })
            .collect();

        let chart = align(&results, TimeFrame::Week);
        assert_eq!(chart.len(), *lengths.iter().min().unwrap(), "{lengths:?}");
    }
}

#[test]
fn first_row_is_zero_for_every_coin() {
    let results = vec![
        coin("a", "a", &[(0, 0.25), (1, 3.0)]),
        coin("b", "b", &[(0, 42_000.0), (1, 1.0)]),
        coin("c", "c", &[(0, -5.0), (1, -10.0)]),
    ];
    let chart = align(&results, TimeFrame::Month);
    for r in &results {
        assert_eq!(chart.rows[0].get(&r.coin.id), Some(0.0));
    }
    // negative baselines are still self-relative
    assert!(close(chart.rows[1].get(&CoinId::from("c")).unwrap(), 100.0));
}

#[test]
fn empty_input_gives_empty_output() {
    assert!(align(&[], TimeFrame::Day).is_empty());

    let mut results = btc_eth();
    results.push(coin("empty", "emp", &[]));
    let chart = align(&results, TimeFrame::Day);
    assert!(chart.is_empty());
    assert!(chart.columns.is_empty());
}

#[test]
fn align_is_pure() {
    let results = btc_eth();
    let before = results.clone();

    let first = align(&results, TimeFrame::Year);
    let second = align(&results, TimeFrame::Year);

    assert_eq!(first, second);
    assert_eq!(results, before);
}

#[test]
fn convert_projects_every_point() {
    let raw = RawSeries {
        prices: vec![
            SeriesPoint::new(0, 1.5),
            SeriesPoint::new(86_400_000, 2.5),
            SeriesPoint::new(172_800_000, 0.0),
        ],
        market_caps: vec![SeriesPoint::new(0, 9.0)],
        total_volumes: Vec::new(),
    };

    let points = convert(&raw, Metric::Prices);
    assert_eq!(points.len(), raw.prices.len());
    for (point, source) in points.iter().zip(&raw.prices) {
        assert_eq!(point.value, source.value);
        assert_eq!(point.metric, Metric::Prices);
    }

    assert_eq!(convert(&raw, Metric::MarketCaps).len(), 1);
    assert!(convert(&raw, Metric::TotalVolumes).is_empty());
}

#[test]
fn zero_baseline_coin_is_skipped_not_fatal() {
    let results = vec![
        coin("bitcoin", "btc", &[(0, 100.0), (1, 120.0)]),
        coin("dead", "ded", &[(0, 0.0), (1, 5.0)]),
    ];
    let chart = align(&results, TimeFrame::Week);

    assert_eq!(chart.len(), 2);
    assert!(chart.rows.iter().all(|r| r.get(&CoinId::from("dead")).is_none()));
    assert_eq!(chart.skipped.len(), 1);
    assert_eq!(chart.skipped[0].reason, SkipReason::ZeroBaseline);
    assert!(!chart.to_symbol_rows()[1].contains_key("DED"));
}

#[test]
fn colliding_symbols_get_distinct_columns() {
    let results = vec![
        coin("usd-coin", "usdc", &[(0, 1.0), (1, 1.0)]),
        coin("bridged-usdc", "usdc", &[(0, 2.0), (1, 1.0)]),
    ];
    let chart = align(&results, TimeFrame::Week);
    let row = &chart.to_symbol_rows()[1];

    assert_eq!(row["USDC (usd-coin)"], 0.0);
    assert_eq!(row["USDC (bridged-usdc)"], -50.0);
    assert_eq!(chart.columns[0].color, COMPARISON_COLORS[0]);
    assert_eq!(chart.columns[1].color, COMPARISON_COLORS[1]);
}

fn from_wire(id: &str, json: &str) -> CoinSeries {
    let wire: MarketChartResponse = serde_json::from_str(json).unwrap();
    CoinSeries::new(CoinRef::new(id, id, id), RawSeries::from(wire))
}

#[test]
fn null_first_price_from_wire_skips_coin_without_shifting() {
    let results = vec![
        from_wire("a", r#"{"prices": [[0, 100], [1, 110], [2, 120]]}"#),
        from_wire("b", r#"{"prices": [[0, null], [1, 50], [2, 100]]}"#),
    ];
    let chart = align(&results, TimeFrame::Day);
    let a = CoinId::from("a");
    let b = CoinId::from("b");

    assert_eq!(chart.len(), 3);
    assert_eq!(chart.skipped.len(), 1);
    assert_eq!(chart.skipped[0].id, b);
    assert_eq!(chart.skipped[0].reason, SkipReason::NonFiniteBaseline);
    assert!(chart.rows.iter().all(|row| row.get(&b).is_none()));
    assert!(close(chart.rows[1].get(&a).unwrap(), 10.0));
    assert!(close(chart.rows[2].get(&a).unwrap(), 20.0));
}

#[test]
fn null_later_price_from_wire_keeps_alignment() {
    let results = vec![
        from_wire("a", r#"{"prices": [[0, 100], [1, 110], [2, 120]]}"#),
        from_wire("b", r#"{"prices": [[0, 50], [1, null], [2, 100]]}"#),
    ];
    let chart = align(&results, TimeFrame::Day);
    let b = CoinId::from("b");

    assert_eq!(chart.len(), 3);
    assert!(chart.skipped.is_empty());
    assert_eq!(chart.rows[1].get(&b), None);
    assert!(close(chart.rows[2].get(&b).unwrap(), 100.0));
    assert!(!chart.to_symbol_rows()[1].contains_key("B"));
}

#[test]
fn wire_timestamp_outside_date_range_is_rejected() {
    let parsed = serde_json::from_str::<MarketChartResponse>(r#"{"prices": [[-1e19, 1], [1, 2]]}"#);
    assert!(parsed.is_err());
}
