//! Display helpers for numbers shown next to charts and in the coin table.

pub mod num;

pub use num::{display, display_change, display_percent, display_with_decimals};
