//! Price lookup command implementation.

use crate::bestbuy::{PriceClient, PriceLookup, PriceQuote};
use crate::config::Config;
use crate::error::{PriceError, Result};
use crate::format::Formatter;
use crate::logging::RunMarker;
use tracing::{error, info};

/// Executes a price lookup by SKU.
pub struct PriceCommand {
    config: Config,
}

impl PriceCommand {
    /// Creates a new price command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Runs a lookup bracketed by the log run markers. Failures are logged
    /// before they are returned.
    pub async fn run(&self, sku: &str) -> Result<String> {
        let _run = self.start_run();
        let client = PriceClient::new(&self.config).inspect_err(log_failure)?;

        self.execute_with_client(&client, sku).await.inspect_err(log_failure)
    }

    /// Same as [`PriceCommand::run`] with a provided client (for testing).
    pub async fn run_with_client(&self, client: &impl PriceLookup, sku: &str) -> Result<String> {
        let _run = self.start_run();

        self.execute_with_client(client, sku).await.inspect_err(log_failure)
    }

    fn start_run(&self) -> RunMarker {
        let run = RunMarker::start();
        match &self.config.source {
            Some(path) => info!("Reading config from {}", path.display()),
            None => info!("Reading config: built-in defaults"),
        }
        info!("Config has {} default option(s)", self.config.default.len());
        run
    }

    /// Fetches the price with the given client and returns formatted output.
    ///
    /// Output is only built once both fields validate, so a failed lookup
    /// never yields partial output.
    pub async fn execute_with_client(&self, client: &impl PriceLookup, sku: &str) -> Result<String> {
        let response = client.fetch_price(sku).await?;
        let quote = PriceQuote::from_response(sku, &response)?;

        info!(
            "SKU {}: regular price {}, current price {}",
            quote.sku, quote.regular_price, quote.current_price
        );

        let formatter = Formatter::new(self.config.format);
        Ok(formatter.format_quote(&quote))
    }
}

fn log_failure(err: &PriceError) {
    error!("Price lookup failed: {}", err);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bestbuy::PriceResponse;
    use crate::config::OutputFormat;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    /// Mock pricing client for testing.
    struct MockPriceClient {
        body: serde_json::Value,
        status: Option<u16>,
        requested: Mutex<Vec<String>>,
    }

    impl MockPriceClient {
        fn new(body: serde_json::Value) -> Self {
            Self { body, status: None, requested: Mutex::new(Vec::new()) }
        }

        fn failing(status: u16) -> Self {
            Self { body: json!({}), status: Some(status), requested: Mutex::new(Vec::new()) }
        }
    }

    #[async_trait]
    impl PriceLookup for MockPriceClient {
        async fn fetch_price(&self, sku: &str) -> Result<PriceResponse> {
            self.requested.lock().unwrap().push(sku.to_string());

            if let Some(status) = self.status {
                return Err(PriceError::RemoteRequest {
                    status,
                    reason: "Simulated failure".to_string(),
                });
            }

            match &self.body {
                serde_json::Value::Object(map) => Ok(map.clone()),
                _ => Ok(PriceResponse::new()),
            }
        }
    }

    #[tokio::test]
    async fn test_price_command_text() {
        let client = MockPriceClient::new(json!({"regularPrice": 199.99, "currentPrice": 149.99}));
        let cmd = PriceCommand::new(Config::default());

        let output = cmd.execute_with_client(&client, "6408300").await.unwrap();
        assert_eq!(output, "Regular price: 199.99\nCurrent price: 149.99");
        assert_eq!(*client.requested.lock().unwrap(), vec!["6408300".to_string()]);
    }

    #[tokio::test]
    async fn test_price_command_json() {
        let client = MockPriceClient::new(json!({"regularPrice": 20, "currentPrice": 15}));
        let config = Config { format: OutputFormat::Json, ..Config::default() };
        let cmd = PriceCommand::new(config);

        let output = cmd.execute_with_client(&client, "42").await.unwrap();
        assert!(output.contains("\"sku\": \"42\""));
        assert!(output.contains("\"current_price\": 15"));
    }

    #[tokio::test]
    async fn test_price_command_sku_passed_verbatim() {
        let client = MockPriceClient::new(json!({"regularPrice": 1, "currentPrice": 1}));
        let cmd = PriceCommand::new(Config::default());

        cmd.execute_with_client(&client, " 64-083 ").await.unwrap();
        assert_eq!(*client.requested.lock().unwrap(), vec![" 64-083 ".to_string()]);
    }

    #[tokio::test]
    async fn test_price_command_missing_field() {
        let client = MockPriceClient::new(json!({"currentPrice": 10}));
        let cmd = PriceCommand::new(Config::default());

        let err = cmd.execute_with_client(&client, "6408300").await.unwrap_err();
        assert!(matches!(err, PriceError::MissingField("regularPrice")));
    }

    #[tokio::test]
    async fn test_price_command_remote_error() {
        let client = MockPriceClient::failing(503);
        let cmd = PriceCommand::new(Config::default());

        let err = cmd.execute_with_client(&client, "6408300").await.unwrap_err();
        assert!(matches!(err, PriceError::RemoteRequest { status: 503, .. }));
    }
}
