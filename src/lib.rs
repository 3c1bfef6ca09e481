//! bby-price - Fast Best Buy price lookup CLI
//!
//! Fetches the regular and current price of a single item by SKU
//! from the Best Buy pricing service.

pub mod bestbuy;
pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;

pub use bestbuy::models::{PriceQuote, PriceResponse};
pub use config::Config;
pub use error::{PriceError, Result};
