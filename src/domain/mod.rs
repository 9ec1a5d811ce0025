//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Rich domain types (validated, business-logic-ready)
//! - `wire.rs` — Raw serde structs matching API responses
//! - `convert.rs` — `TryFrom`/`From` conversions with validation
//! - `client.rs` — Sub-client with HTTP methods and caching
//!
//! `market_chart` and `comparison` also hold the pure transformations
//! (`series.rs`, `align.rs`) that turn raw history into chart rows.

pub mod coin;
pub mod comparison;
pub mod market_chart;
pub mod search;
