//! Shared library for the price catalog tools.
//!
//! This crate provides configuration, models and the retail pricing client used by the binaries.

pub mod config;
pub mod error;
pub mod models;
pub mod pricing;

pub use config::{DatabaseSettings, FetcherConfig, DEFAULT_OUTPUT_PATH};
pub use error::{Error, Result};
pub use models::{PriceItem, PriceListPage, PriceMap};
pub use pricing::{default_prices_url, fetch_all, write_price_map, PageSource, PricingClient};
