//! CLI command implementations.

pub mod price;

pub use price::PriceCommand;
