//! HTTP client layer — `CoinGeckoHttp` with a shared retry policy.

pub mod client;
pub mod retry;

pub use client::CoinGeckoHttp;
pub use retry::{RetryConfig, RetryPolicy};
