//! Best Buy pricing client and response models.

pub mod client;
pub mod models;

pub use client::{PriceClient, PriceLookup};
pub use models::{PriceQuote, PriceResponse};
