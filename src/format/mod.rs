//! Output formatting for price quotes (text, JSON).

use crate::bestbuy::PriceQuote;
use crate::config::OutputFormat;

/// Formats price quotes for output.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a single quote. No trailing newline.
    pub fn format_quote(&self, quote: &PriceQuote) -> String {
        match self.format {
            OutputFormat::Text => self.text_quote(quote),
            OutputFormat::Json => self.json_quote(quote),
        }
    }

    fn text_quote(&self, quote: &PriceQuote) -> String {
        format!("Regular price: {}\nCurrent price: {}", quote.regular_price, quote.current_price)
    }

    fn json_quote(&self, quote: &PriceQuote) -> String {
        serde_json::to_string_pretty(quote).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(regular: &str, current: &str) -> PriceQuote {
        PriceQuote {
            sku: "6408300".to_string(),
            regular_price: serde_json::from_str(regular).unwrap(),
            current_price: serde_json::from_str(current).unwrap(),
        }
    }

    #[test]
    fn test_text_exact() {
        let output = Formatter::new(OutputFormat::Text).format_quote(&quote("199.99", "149.99"));
        assert_eq!(output, "Regular price: 199.99\nCurrent price: 149.99");
    }

    #[test]
    fn test_text_keeps_number_text() {
        let output = Formatter::new(OutputFormat::Text).format_quote(&quote("500.0", "10"));
        assert_eq!(output, "Regular price: 500.0\nCurrent price: 10");
    }

    #[test]
    fn test_json() {
        let output = Formatter::new(OutputFormat::Json).format_quote(&quote("199.99", "149.99"));
        assert!(output.starts_with('{'));

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["sku"], "6408300");
        assert_eq!(parsed["regular_price"], 199.99);
        assert_eq!(parsed["current_price"], 149.99);
    }
}
