//! Data models for Best Buy price responses.

use crate::error::{PriceError, Result};
use serde::Serialize;
use serde_json::{Map, Number, Value};

/// Raw JSON object returned by the pricing endpoint.
pub type PriceResponse = Map<String, Value>;

/// Key holding the non-discounted list price.
pub const REGULAR_PRICE: &str = "regularPrice";

/// Key holding the active selling price.
pub const CURRENT_PRICE: &str = "currentPrice";

/// Regular and current price for one SKU.
///
/// Prices keep the service's number text, so `500.0` stays `500.0` and `10`
/// stays `10` when printed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceQuote {
    /// SKU the quote was requested for
    pub sku: String,
    /// List price before discounts
    pub regular_price: Number,
    /// Price currently charged
    pub current_price: Number,
}

impl PriceQuote {
    /// Extracts the two price fields from a raw response. Other keys are ignored.
    pub fn from_response(sku: impl Into<String>, response: &PriceResponse) -> Result<Self> {
        Ok(Self {
            sku: sku.into(),
            regular_price: number_field(response, REGULAR_PRICE)?,
            current_price: number_field(response, CURRENT_PRICE)?,
        })
    }
}

fn number_field(response: &PriceResponse, field: &'static str) -> Result<Number> {
    match response.get(field) {
        Some(Value::Number(number)) => Ok(number.clone()),
        Some(other) => Err(PriceError::InvalidField { field, found: json_type(other).to_string() }),
        None => Err(PriceError::MissingField(field)),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
