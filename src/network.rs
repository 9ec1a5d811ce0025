//! Network URL constants and request defaults for the CoinGecko API.

/// Default REST API base URL (public / demo tier).
pub const DEFAULT_API_URL: &str = "https://api.coingecko.com/api/v3";

/// REST API base URL for the pro tier.
pub const PRO_API_URL: &str = "https://pro-api.coingecko.com/api/v3";

/// Header carrying a demo-tier API key.
pub const DEMO_KEY_HEADER: &str = "x-cg-demo-api-key";

/// Header carrying a pro-tier API key.
pub const PRO_KEY_HEADER: &str = "x-cg-pro-api-key";

/// Coins per page of the market table.
pub const DEFAULT_PER_PAGE: u32 = 20;

/// Auto-refresh interval of the market table, in seconds.
pub const DEFAULT_REFRESH_SECS: u64 = 60;

/// Debounce applied to live search keystrokes, in milliseconds.
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 300;

/// TTL of the coin-detail cache, in seconds.
pub const DEFAULT_CACHE_TTL_SECS: u64 = 60;
