//! Compare a few coins over one time frame and print the aligned rows.
//!
//! ```bash
//! cargo run --example compare --features native -- bitcoin ethereum solana
//! ```
//!
//! Reads `COINGECKO_API_KEY` / `COINGECKO_API_TIER` / `COINGECKO_BASE_URL` from
//! the environment or a `.env` file.

use cointrack::prelude::*;

#[tokio::main]
async fn main() -> Result<(), SdkError> {
    dotenvy::dotenv().ok();

    let client = CoinTrackClient::builder().from_env()?.build()?;

    let mut selection = CoinSelection::new();
    let mut args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        args = vec!["bitcoin".into(), "ethereum".into()];
    }
    for id in args {
        if let Err(e) = selection.toggle(CoinId::new(id)) {
            eprintln!("{e}");
            break;
        }
    }

    let currency = client.config().currency;
    let view = client
        .comparisons()
        .fetch(&selection, currency, TimeFrame::Week)
        .await?;

    for stat in &view.stats {
        println!(
            "{:<24} {:>14} {} {:>8}  cap {}",
            stat.coin.display_name(),
            stat.price_display(),
            stat.trend.arrow(),
            stat.change_display(),
            stat.market_cap_display(),
        );
    }
    for skipped in &view.chart.skipped {
        println!("skipped {} ({:?})", skipped.id, skipped.reason);
    }

    println!();
    for row in view.chart.to_symbol_rows() {
        println!("{}", serde_json::Value::Object(row));
    }

    Ok(())
}
