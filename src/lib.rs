//! # cointrack
//!
//! Core of a cryptocurrency price dashboard: market-chart conversion,
//! multi-coin percentage-change comparison, and a client for the CoinGecko
//! REST API. Builds for native and WASM targets.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core** — Types, series conversion, comparison alignment (always available, WASM-safe, no I/O)
//! 2. **Config** — Injected `ClientConfig` and network defaults
//! 3. **HTTP API** — `CoinGeckoHttp` with retry policies
//! 4. **High-Level Client** — `CoinTrackClient` with nested sub-clients and caching
//! 5. **Bindings** — JSON-in/JSON-out `wasm-bindgen` exports of the core
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cointrack::prelude::*;
//!
//! let client = CoinTrackClient::builder().from_env()?.build()?;
//!
//! let mut selection = CoinSelection::new();
//! selection.toggle("bitcoin".into())?;
//! selection.toggle("ethereum".into())?;
//!
//! let view = client
//!     .comparisons()
//!     .fetch(&selection, VsCurrency::Usd, TimeFrame::Week)
//!     .await?;
//! for row in view.chart.to_symbol_rows() {
//!     println!("{}", serde_json::Value::Object(row));
//! }
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and enums used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions.
pub mod domain;

/// Unified error types.
pub mod error;

/// The seam between data fetching and the pure core.
pub mod source;

// ── Layer 2: Config ──────────────────────────────────────────────────────────

/// Network URL constants and defaults.
pub mod network;

/// Client configuration and credentials.
pub mod config;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with retry policies.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `CoinTrackClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Layer 5: Bindings ────────────────────────────────────────────────────────

#[cfg(feature = "wasm")]
pub mod wasm;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{CoinId, LabelStyle, Metric, Symbol, TimeFrame, VsCurrency};

    // Domain types — market chart
    pub use crate::domain::market_chart::{
        convert, MetricPoint, RawSeries, SeriesConverter, SeriesPoint,
    };

    // Domain types — comparison
    pub use crate::domain::comparison::{
        align, CoinRef, CoinSelection, CoinSeries, Column, ComparisonAligner, ComparisonChart,
        ComparisonRow, ComparisonStat, SelectionError, SkipReason, SkippedCoin, Toggle,
        COMPARISON_COLORS, MAX_COMPARE_COINS,
    };

    // Domain types — coin, search
    pub use crate::domain::coin::{
        CoinDetail, CoinImage, CoinSnapshot, MarketCoin, MarketData, Momentum, PriceTrend,
    };
    pub use crate::domain::search::{SearchHit, COMPARISON_SEARCH_LIMIT};

    // Errors
    pub use crate::error::{HttpError, SdkError};

    // Config
    pub use crate::config::{ApiKey, ClientConfig};
    pub use crate::network::DEFAULT_API_URL;

    // Data source
    pub use crate::source::MarketDataSource;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        CoinTrackClient, CoinTrackClientBuilder, CoinsClient, ComparisonsClient,
        MarketChartsClient, SearchClient,
    };
    #[cfg(feature = "http")]
    pub use crate::domain::coin::client::ChartPanel;
    #[cfg(feature = "http")]
    pub use crate::domain::comparison::client::{fetch_comparison, ComparisonView};
    #[cfg(feature = "http")]
    pub use crate::domain::search::session::{SearchResults, SearchSession};
    #[cfg(feature = "http")]
    pub use crate::http::retry::{RetryConfig, RetryPolicy};
}
